//! The animated background: a box of floating, colliding spheres.
//!
//! - `body`      — per-sphere state and random spawning
//! - `physics`   — the per-tick update (bounce, collide, damp, drift, move)
//! - `resources` — live-resource accounting
//! - `context`   — `SceneContext`, the owned build / tick / dispose unit

pub mod body;
pub mod context;
pub mod physics;
pub mod resources;

pub use body::Sphere;
pub use context::{SceneContext, SceneSetup, TextureSlot};
pub use physics::World;
pub use resources::{ResourceKind, ResourceTracker, Tracked};

use crate::fast_math::Vec3;

/// Number of spheres in every scene, whatever the score.
pub const SPHERE_COUNT: usize = 30;

/// Axis-aligned box the spheres live in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(Vec3::new(-20.0, -20.0, -5.0), Vec3::new(20.0, 20.0, 5.0))
    }
}

/// Tuning for the sphere simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub radius: f32,
    pub bounds: Bounds,
    /// Velocity kept (with sign flipped) after hitting a wall
    pub restitution: f32,
    /// Scales the normal impulse exchanged on sphere contact
    pub elasticity: f32,
    /// Per-tick uniform velocity decay
    pub damping: f32,
    /// Peak per-tick velocity change from the wandering force, per axis
    pub drift: Vec3,
    /// Spawn velocity spread, per axis
    pub spawn_velocity: Vec3,
    /// Spawn spin spread about the x axis
    pub spawn_spin: f32,
    /// Constant spin about the y axis, radians per tick
    pub spin_y: f32,
    pub mass: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            radius: 3.0,
            bounds: Bounds::default(),
            restitution: 0.8,
            elasticity: 0.5,
            damping: 0.98,
            drift: Vec3::new(0.002, 0.002, 0.001),
            spawn_velocity: Vec3::new(0.2, 0.2, 0.1),
            spawn_spin: 0.002,
            spin_y: 0.01,
            mass: 0.5,
        }
    }
}
