//! egui Painter-based scene rendering.
//!
//! Draws the bucket gradient across the whole viewport, then every sphere as
//! a lit, textured disc mesh, far spheres first so near ones overlap them.

use egui::epaint::{Vertex, WHITE_UV};
use egui::{Color32, Mesh, Pos2, Rect, Shape};

use crate::render::camera::Camera;
use crate::render::lighting::LightRig;
use crate::render::mesh::{sphere_uv, SphereGeometry};
use crate::scene::SceneContext;
use crate::score::Gradient;

/// Persistent state for scene painting.
pub struct ScenePainter {
    camera: Camera,
    order: Vec<usize>,
}

impl Default for ScenePainter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenePainter {
    pub fn new() -> Self {
        Self {
            camera: Camera::default(),
            order: Vec::new(),
        }
    }

    /// Draw `scene` into `rect`. Uploads newly decoded textures first.
    pub fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, rect: Rect, scene: &mut SceneContext) {
        paint_gradient(painter, rect, &scene.theme().gradient);

        scene.upload_textures(ctx);
        let Some(geometry) = scene.geometry() else {
            return;
        };

        // Normals are view-space, so vertex lighting is the same for every
        // sphere sharing a material.
        let rig = LightRig::from_palette(&scene.theme().lights);
        let mut shaded: Vec<(Option<egui::TextureId>, Vec<Color32>)> = Vec::new();
        for &kind in scene.theme().textures() {
            let texture = scene.texture_slot(kind).and_then(|s| s.texture_id());
            let surface = scene
                .material_for(shaded.len())
                .map(|m| m.surface)
                .unwrap_or_default();
            let colors = geometry
                .vertices
                .iter()
                .map(|v| rig.shade(v.normal, &surface).to_color32())
                .collect();
            shaded.push((texture, colors));
        }
        if shaded.is_empty() {
            return;
        }

        let spheres = scene.world().spheres();
        let radius = scene.world().config().radius;

        self.order.clear();
        self.order.extend(0..spheres.len());
        self.order
            .sort_by(|&a, &b| spheres[a].position.z.total_cmp(&spheres[b].position.z));

        for &i in &self.order {
            let sphere = &spheres[i];
            let Some(projected) = self.camera.project(sphere.position, rect) else {
                continue;
            };
            let (texture, colors) = &shaded[i % shaded.len()];
            let mesh = sphere_mesh(
                geometry,
                projected.center,
                radius * projected.scale,
                sphere.rotation,
                *texture,
                colors,
            );
            painter.add(Shape::mesh(mesh));
        }
    }
}

/// Horizontal two-stop gradient filling `rect`.
pub fn paint_gradient(painter: &egui::Painter, rect: Rect, gradient: &Gradient) {
    let from = gradient.from.to_color32();
    let to = gradient.to.to_color32();
    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), to);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// One sphere as a screen-space disc. Texture coordinates come from the
/// object-space normal, so spinning the sphere scrolls its texture.
fn sphere_mesh(
    geometry: &SphereGeometry,
    center: Pos2,
    radius_px: f32,
    rotation: crate::fast_math::Vec3,
    texture: Option<egui::TextureId>,
    colors: &[Color32],
) -> Mesh {
    let mut mesh = match texture {
        Some(id) => Mesh::with_texture(id),
        None => Mesh::default(),
    };
    mesh.vertices.reserve(geometry.vertices.len());

    for (v, &color) in geometry.vertices.iter().zip(colors) {
        let pos = Pos2::new(
            center.x + v.offset[0] * radius_px,
            center.y - v.offset[1] * radius_px,
        );
        let uv = if texture.is_some() {
            let object = v.normal.rotate_x(-rotation.x).rotate_y(-rotation.y);
            let [u, t] = sphere_uv(object);
            Pos2::new(u, t)
        } else {
            WHITE_UV
        };
        mesh.vertices.push(Vertex { pos, uv, color });
    }
    mesh.indices.extend_from_slice(&geometry.indices);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fast_math::Vec3;

    #[test]
    fn untextured_mesh_uses_white_uv() {
        let g = SphereGeometry::new(8, 2);
        let colors = vec![Color32::WHITE; g.vertices.len()];
        let mesh = sphere_mesh(&g, Pos2::new(50.0, 50.0), 10.0, Vec3::ZERO, None, &colors);
        assert_eq!(mesh.vertices.len(), g.vertices.len());
        assert!(mesh.vertices.iter().all(|v| v.uv == WHITE_UV));
        assert_eq!(mesh.vertices[0].pos, Pos2::new(50.0, 50.0));
    }

    #[test]
    fn silhouette_sits_on_projected_radius() {
        let g = SphereGeometry::new(8, 2);
        let colors = vec![Color32::WHITE; g.vertices.len()];
        let mesh = sphere_mesh(&g, Pos2::ZERO, 10.0, Vec3::ZERO, None, &colors);
        let last = mesh.vertices.last().unwrap().pos;
        assert!((last.to_vec2().length() - 10.0).abs() < 1e-3);
    }
}
