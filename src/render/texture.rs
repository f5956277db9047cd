//! Background sphere-texture loader.
//!
//! Spawns background threads to read the emoji images from the asset
//! directory and decode them into RGBA pixel buffers ready for egui texture
//! creation. A missing or broken file only costs the sphere its texture.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::mpsc;

use crate::error::AssetError;

/// Widest texture kept after decoding; larger images are downscaled.
pub const MAX_TEXTURE_WIDTH: u32 = 512;

/// The five sphere skins, one per score bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    Love,
    Surprise,
    Like,
    Laugh,
    Angry,
}

impl TextureKind {
    pub const ALL: [TextureKind; 5] = [
        TextureKind::Love,
        TextureKind::Surprise,
        TextureKind::Like,
        TextureKind::Laugh,
        TextureKind::Angry,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            TextureKind::Love => "love.jpg",
            TextureKind::Surprise => "surprise.jpg",
            TextureKind::Like => "like.jpg",
            TextureKind::Laugh => "laugh.jpg",
            TextureKind::Angry => "angry.jpg",
        }
    }

    pub fn path_in(self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

/// Decoded image data (RGBA).
#[derive(Clone)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Read and decode one image file.
pub fn load_image(path: &Path) -> Result<ImageData, AssetError> {
    let bytes = std::fs::read(path)?;
    let img = image::load_from_memory(&bytes)?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_TEXTURE_WIDTH {
        let ratio = MAX_TEXTURE_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_TEXTURE_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Ok(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

/// Manages background texture loading and decoding.
pub struct TextureLoader {
    dir: Option<PathBuf>,
    pending: HashMap<TextureKind, mpsc::Receiver<Result<ImageData, AssetError>>>,
    loaded: HashMap<TextureKind, ImageData>,
    failed: HashSet<TextureKind>,
}

impl TextureLoader {
    /// A loader reading from `dir`; with `None` every request fails at once.
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self {
            dir,
            pending: HashMap::new(),
            loaded: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Request a texture to be loaded in the background.
    pub fn request(&mut self, kind: TextureKind) {
        if self.loaded.contains_key(&kind)
            || self.pending.contains_key(&kind)
            || self.failed.contains(&kind)
        {
            return;
        }

        let Some(dir) = &self.dir else {
            log::warn!("No asset directory; {} stays untextured", kind.file_name());
            self.failed.insert(kind);
            return;
        };

        let (tx, rx) = mpsc::channel();
        let path = kind.path_in(dir);

        std::thread::spawn(move || {
            let result = load_image(&path);
            let _ = tx.send(result);
        });

        self.pending.insert(kind, rx);
    }

    /// Poll for completed loads. Call every frame.
    pub fn poll(&mut self) {
        let mut completed = Vec::new();
        for (&kind, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Ok(data)) => {
                    self.loaded.insert(kind, data);
                    completed.push(kind);
                }
                Ok(Err(e)) => {
                    log::warn!("Texture {} unavailable: {}", kind.file_name(), e);
                    self.failed.insert(kind);
                    completed.push(kind);
                }
                Err(mpsc::TryRecvError::Empty) => {}
                Err(mpsc::TryRecvError::Disconnected) => {
                    self.failed.insert(kind);
                    completed.push(kind);
                }
            }
        }
        for kind in completed {
            self.pending.remove(&kind);
        }
    }

    /// Move a loaded texture's pixels out of the loader.
    pub fn take(&mut self, kind: TextureKind) -> Option<ImageData> {
        self.loaded.remove(&kind)
    }

    pub fn is_failed(&self, kind: TextureKind) -> bool {
        self.failed.contains(&kind)
    }

    /// Number of textures still being loaded.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_deduplicates() {
        let mut loader = TextureLoader::new(Some(PathBuf::from("/nonexistent")));
        loader.request(TextureKind::Love);
        loader.request(TextureKind::Love); // should not duplicate
        assert_eq!(loader.pending.len(), 1);
    }

    #[test]
    fn loader_without_dir_fails_immediately() {
        let mut loader = TextureLoader::new(None);
        loader.request(TextureKind::Angry);
        assert!(loader.is_failed(TextureKind::Angry));
        assert_eq!(loader.pending_count(), 0);
    }

    #[test]
    fn file_names_are_distinct() {
        let names: HashSet<_> = TextureKind::ALL.iter().map(|k| k.file_name()).collect();
        assert_eq!(names.len(), 5);
    }
}
