pub mod config;
pub mod error;
pub mod score;
pub mod panel;
pub mod net;
pub mod scene;
pub mod render;

// Vector math shared by the physics step and the renderer
pub mod fast_math;
