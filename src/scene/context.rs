//! `SceneContext` — one fully built background scene.
//!
//! A context is built for a single score and owns everything that score
//! needs: the sphere world, the shared sphere geometry, one material and one
//! texture slot per active texture, and the loader feeding those slots. A
//! score change builds a fresh context and disposes the old one; nothing
//! survives from one build to the next.

use std::path::PathBuf;

use crate::render::lighting::Material;
use crate::render::mesh::SphereGeometry;
use crate::render::texture::{ImageData, TextureKind, TextureLoader};
use crate::score::{Score, Theme};

use super::physics::StepStats;
use super::{ResourceKind, ResourceTracker, SceneConfig, Tracked, World, SPHERE_COUNT};

/// Inputs every build shares.
#[derive(Debug, Clone, Default)]
pub struct SceneSetup {
    pub config: SceneConfig,
    /// Directory holding the sphere textures; `None` renders untextured
    pub assets_dir: Option<PathBuf>,
    pub tracker: ResourceTracker,
}

/// Surface of every sphere wearing `texture`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereMaterial {
    pub texture: TextureKind,
    pub surface: Material,
}

/// One texture's pixels, uploaded lazily to the GPU on first paint.
pub struct TextureSlot {
    kind: TextureKind,
    image: Option<ImageData>,
    handle: Option<egui::TextureHandle>,
    missing: bool,
}

impl TextureSlot {
    fn new(kind: TextureKind) -> Self {
        Self {
            kind,
            image: None,
            handle: None,
            missing: false,
        }
    }

    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    /// Pixels arrived (uploaded or not).
    pub fn is_loaded(&self) -> bool {
        self.image.is_some() || self.handle.is_some()
    }

    /// Load failed; spheres fall back to an untextured material.
    pub fn is_missing(&self) -> bool {
        self.missing
    }

    pub fn texture_id(&self) -> Option<egui::TextureId> {
        self.handle.as_ref().map(egui::TextureHandle::id)
    }

    /// Upload decoded pixels to the GPU and release the CPU copy.
    pub fn upload(&mut self, ctx: &egui::Context) {
        if self.handle.is_some() {
            return;
        }
        if let Some(image) = self.image.take() {
            let color = egui::ColorImage::from_rgba_unmultiplied(
                [image.width as usize, image.height as usize],
                &image.rgba,
            );
            let name = format!("sphere-{}", self.kind.file_name());
            self.handle = Some(ctx.load_texture(name, color, egui::TextureOptions::LINEAR));
        }
    }
}

pub struct SceneContext {
    theme: Theme,
    world: World,
    geometry: Option<Tracked<SphereGeometry>>,
    materials: Vec<Tracked<SphereMaterial>>,
    textures: Vec<Tracked<TextureSlot>>,
    loader: Option<TextureLoader>,
    disposed: bool,
}

impl SceneContext {
    /// Build a fresh scene for `score` (or the idle scene for `None`).
    pub fn build(score: Option<Score>, setup: &SceneSetup, rng: &mut fastrand::Rng) -> Self {
        let theme = Theme::for_score(score);
        let tracker = &setup.tracker;

        let world = World::spawn(SPHERE_COUNT, setup.config.clone(), rng);
        let geometry = tracker.track(ResourceKind::Geometry, SphereGeometry::default());

        let mut loader = TextureLoader::new(setup.assets_dir.clone());
        let mut materials = Vec::with_capacity(theme.textures().len());
        let mut textures = Vec::with_capacity(theme.textures().len());
        for &kind in theme.textures() {
            loader.request(kind);
            materials.push(tracker.track(
                ResourceKind::Material,
                SphereMaterial {
                    texture: kind,
                    surface: Material::default(),
                },
            ));
            textures.push(tracker.track(ResourceKind::Texture, TextureSlot::new(kind)));
        }

        log::debug!(
            "Scene built for {:?}: {} spheres, {} textures",
            theme.bucket,
            world.spheres().len(),
            textures.len()
        );

        let mut scene = Self {
            theme,
            world,
            geometry: Some(geometry),
            materials,
            textures,
            loader: Some(loader),
            disposed: false,
        };
        scene.poll_textures();
        scene
    }

    /// Advance the simulation one tick at wall-clock `time` (seconds).
    /// A disposed scene stays frozen.
    pub fn tick(&mut self, time: f32) -> StepStats {
        if self.disposed {
            return StepStats::default();
        }
        self.poll_textures();
        self.world.step(time)
    }

    /// Release geometry, materials, textures and pending loads.
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.geometry = None;
        self.materials.clear();
        self.textures.clear();
        self.loader = None;
        self.disposed = true;
        log::debug!("Scene for {:?} disposed", self.theme.bucket);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn sphere_count(&self) -> usize {
        self.world.spheres().len()
    }

    pub fn geometry(&self) -> Option<&SphereGeometry> {
        self.geometry.as_deref()
    }

    /// Material worn by sphere `index`.
    pub fn material_for(&self, index: usize) -> Option<&SphereMaterial> {
        if self.materials.is_empty() {
            return None;
        }
        self.materials
            .get(index % self.materials.len())
            .map(|m| &**m)
    }

    pub fn texture_slot(&self, kind: TextureKind) -> Option<&TextureSlot> {
        self.textures.iter().find(|s| s.kind == kind).map(|s| &**s)
    }

    /// Push any finished texture decodes into the GPU.
    pub fn upload_textures(&mut self, ctx: &egui::Context) {
        self.poll_textures();
        for slot in &mut self.textures {
            slot.upload(ctx);
        }
    }

    /// Move finished loads from the loader into their slots.
    fn poll_textures(&mut self) {
        let Some(loader) = self.loader.as_mut() else {
            return;
        };
        loader.poll();
        for slot in &mut self.textures {
            if slot.is_loaded() || slot.missing {
                continue;
            }
            if let Some(image) = loader.take(slot.kind) {
                slot.image = Some(image);
            } else if loader.is_failed(slot.kind) {
                slot.missing = true;
            }
        }
    }
}

impl Drop for SceneContext {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_scene_wears_all_textures_in_cycle_order() {
        let setup = SceneSetup::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let scene = SceneContext::build(None, &setup, &mut rng);
        let kinds: Vec<_> = (0..5).map(|i| scene.material_for(i).unwrap().texture).collect();
        assert_eq!(
            kinds,
            vec![
                TextureKind::Love,
                TextureKind::Like,
                TextureKind::Laugh,
                TextureKind::Surprise,
                TextureKind::Angry
            ]
        );
        assert_eq!(scene.material_for(7).unwrap().texture, TextureKind::Laugh);
    }

    #[test]
    fn missing_assets_mark_slots_missing() {
        let setup = SceneSetup::default();
        let mut rng = fastrand::Rng::with_seed(1);
        let scene = SceneContext::build(Score::from_raw(0.9), &setup, &mut rng);
        let slot = scene.texture_slot(TextureKind::Angry).unwrap();
        assert!(slot.is_missing());
        assert!(slot.texture_id().is_none());
    }

    #[test]
    fn disposed_scene_is_frozen() {
        let setup = SceneSetup::default();
        let mut rng = fastrand::Rng::with_seed(3);
        let mut scene = SceneContext::build(None, &setup, &mut rng);
        scene.dispose();
        let before = scene.world().spheres().to_vec();
        scene.tick(1.0);
        assert_eq!(scene.world().spheres(), &before[..]);
        assert!(scene.geometry().is_none());
        assert!(scene.material_for(0).is_none());
    }
}
