use crate::fast_math::Vec3;

use super::SceneConfig;

/// One sphere's simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Euler angles (x, y); z stays zero
    pub rotation: Vec3,
    /// Spin about the x axis, radians per tick
    pub spin_x: f32,
    /// Phase offset of the wandering force
    pub drift_phase: f32,
    pub mass: f32,
}

impl Sphere {
    /// A motionless sphere at `position` with the configured mass.
    pub fn at_rest(position: Vec3, config: &SceneConfig) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Vec3::ZERO,
            spin_x: 0.0,
            drift_phase: 0.0,
            mass: config.mass,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// A sphere placed uniformly inside the bounds with a small random
    /// velocity, spin and drift phase.
    pub fn random(rng: &mut fastrand::Rng, config: &SceneConfig) -> Self {
        let b = config.bounds;
        let size = b.size();
        let position = Vec3::new(
            b.min.x + rng.f32() * size.x,
            b.min.y + rng.f32() * size.y,
            b.min.z + rng.f32() * size.z,
        );
        let spread = config.spawn_velocity;
        let velocity = Vec3::new(
            (rng.f32() - 0.5) * spread.x,
            (rng.f32() - 0.5) * spread.y,
            (rng.f32() - 0.5) * spread.z,
        );

        Self {
            position,
            velocity,
            rotation: Vec3::ZERO,
            spin_x: (rng.f32() - 0.5) * config.spawn_spin,
            drift_phase: rng.f32() * 1000.0,
            mass: config.mass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_spawn_stays_in_bounds() {
        let config = SceneConfig::default();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..500 {
            let s = Sphere::random(&mut rng, &config);
            let (lo, hi) = (config.bounds.min, config.bounds.max);
            assert!(s.position.x >= lo.x && s.position.x < hi.x);
            assert!(s.position.y >= lo.y && s.position.y < hi.y);
            assert!(s.position.z >= lo.z && s.position.z < hi.z);
            assert!(s.velocity.x.abs() <= 0.1 && s.velocity.z.abs() <= 0.05);
            assert!(s.spin_x.abs() <= 0.001);
            assert!((0.0..1000.0).contains(&s.drift_phase));
            assert_eq!(s.mass, 0.5);
        }
    }
}
