//! Per-tick sphere update.
//!
//! Each tick walks the spheres in order. For sphere `i` it bounces off the
//! walls, resolves contact against every later sphere `j > i`, then damps
//! `i`'s velocity. Once all pairs are settled every sphere receives the
//! wandering force, spins, and moves by its velocity.
//!
//! The pair check is a plain O(N²) sweep; at 30 spheres that is 435 distance
//! tests per tick.

use crate::fast_math::Vec3;

use super::{Bounds, SceneConfig, Sphere};

/// Which axes bounced during a reflection check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounce {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl Bounce {
    pub fn any(self) -> bool {
        self.x || self.y || self.z
    }
}

/// Flip and scale each velocity component whose axis has the sphere's
/// surface beyond a wall.
pub fn reflect_bounds(sphere: &mut Sphere, radius: f32, bounds: &Bounds, restitution: f32) -> Bounce {
    let p = sphere.position;
    let outside = |c: f32, lo: f32, hi: f32| c - radius < lo || c + radius > hi;

    let bounce = Bounce {
        x: outside(p.x, bounds.min.x, bounds.max.x),
        y: outside(p.y, bounds.min.y, bounds.max.y),
        z: outside(p.z, bounds.min.z, bounds.max.z),
    };
    if bounce.x {
        sphere.velocity.x *= -restitution;
    }
    if bounce.y {
        sphere.velocity.y *= -restitution;
    }
    if bounce.z {
        sphere.velocity.z *= -restitution;
    }
    bounce
}

/// Separate two overlapping spheres and exchange a damped normal impulse.
///
/// Both the push-apart and the impulse are split by mass: each side moves by
/// `2·m_other / (m_a + m_b)` of the symmetric share, which is exactly 1 for
/// equal masses. Returns whether the pair was in contact.
pub fn resolve_pair(a: &mut Sphere, b: &mut Sphere, radius: f32, elasticity: f32) -> bool {
    let contact = radius * 2.0;
    let delta = b.position - a.position;
    let dist_sq = delta.length_squared();
    // Coincident centers have no contact normal
    if dist_sq >= contact * contact || dist_sq == 0.0 {
        return false;
    }

    let dist = dist_sq.sqrt();
    let normal = delta * (1.0 / dist);
    let (wa, wb) = mass_shares(a.mass, b.mass);

    let overlap = (contact - dist) * 0.5;
    a.position -= normal * (overlap * wa);
    b.position += normal * (overlap * wb);

    let impulse = (b.velocity - a.velocity).dot(normal) * elasticity;
    a.velocity += normal * (impulse * wa);
    b.velocity -= normal * (impulse * wb);
    true
}

fn mass_shares(ma: f32, mb: f32) -> (f32, f32) {
    let total = ma + mb;
    if total > 0.0 {
        (2.0 * mb / total, 2.0 * ma / total)
    } else {
        (1.0, 1.0)
    }
}

/// Sinusoidal wandering force at wall-clock time `t` (seconds).
pub fn apply_drift(sphere: &mut Sphere, t: f32, strength: Vec3) {
    let phase = sphere.drift_phase;
    sphere.velocity.x += (t + phase).sin() * strength.x;
    sphere.velocity.y += (t + phase).cos() * strength.y;
    sphere.velocity.z += (t * 0.5 + phase).sin() * strength.z;
}

/// Counts from one tick, mostly for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepStats {
    pub wall_bounces: usize,
    pub contacts: usize,
}

/// The sphere population plus its tuning.
#[derive(Debug, Clone)]
pub struct World {
    config: SceneConfig,
    spheres: Vec<Sphere>,
    ticks: u64,
}

impl World {
    /// Spawn `count` randomly placed spheres.
    pub fn spawn(count: usize, config: SceneConfig, rng: &mut fastrand::Rng) -> Self {
        let spheres = (0..count).map(|_| Sphere::random(rng, &config)).collect();
        Self::from_spheres(config, spheres)
    }

    pub fn from_spheres(config: SceneConfig, spheres: Vec<Sphere>) -> Self {
        Self {
            config,
            spheres,
            ticks: 0,
        }
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance one tick at wall-clock time `t` (seconds).
    pub fn step(&mut self, t: f32) -> StepStats {
        let mut stats = StepStats::default();
        let cfg = &self.config;
        let n = self.spheres.len();

        for i in 0..n {
            if reflect_bounds(&mut self.spheres[i], cfg.radius, &cfg.bounds, cfg.restitution).any() {
                stats.wall_bounces += 1;
            }

            for j in (i + 1)..n {
                let (head, tail) = self.spheres.split_at_mut(j);
                if resolve_pair(&mut head[i], &mut tail[0], cfg.radius, cfg.elasticity) {
                    stats.contacts += 1;
                }
            }

            self.spheres[i].velocity *= cfg.damping;
        }

        for sphere in &mut self.spheres {
            apply_drift(sphere, t, cfg.drift);
            sphere.rotation.y += cfg.spin_y;
            sphere.rotation.x += sphere.spin_x;
            sphere.position += sphere.velocity;
        }

        self.ticks += 1;
        stats
    }

    /// Sum of ½·m·|v|² over all spheres.
    pub fn kinetic_energy(&self) -> f32 {
        self.spheres
            .iter()
            .map(|s| 0.5 * s.mass * s.velocity.length_squared())
            .sum()
    }
}
