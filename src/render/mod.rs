pub mod camera;
pub mod color;
pub mod lighting;
pub mod mesh;
pub mod painter;
pub mod texture;
