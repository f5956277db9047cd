use cringe_detector::fast_math::Vec3;
use cringe_detector::scene::physics::{reflect_bounds, resolve_pair};
use cringe_detector::scene::{Bounds, SceneConfig, Sphere, World};
use rstest::rstest;

fn config() -> SceneConfig {
    SceneConfig::default()
}

fn still_config() -> SceneConfig {
    SceneConfig {
        drift: Vec3::ZERO,
        ..SceneConfig::default()
    }
}

// --- WALL REFLECTION ---
// Box is [-20,20] x [-20,20] x [-5,5], radius 3.
#[rstest]
#[case(Vec3::new(18.0, 0.0, 0.0), 0)] // right face
#[case(Vec3::new(-17.5, 0.0, 0.0), 0)] // left face
#[case(Vec3::new(0.0, 17.1, 0.0), 1)] // top face
#[case(Vec3::new(0.0, -19.0, 0.0), 1)] // bottom face
#[case(Vec3::new(0.0, 0.0, 2.5), 2)] // back face
#[case(Vec3::new(0.0, 0.0, -2.5), 2)] // front face
fn test_wall_flips_only_that_axis(#[case] position: Vec3, #[case] axis: usize) {
    let cfg = config();
    let mut s = Sphere::at_rest(position, &cfg).with_velocity(Vec3::new(0.1, 0.1, 0.1));
    let bounce = reflect_bounds(&mut s, cfg.radius, &cfg.bounds, cfg.restitution);
    let hit = [bounce.x, bounce.y, bounce.z];
    let v = [s.velocity.x, s.velocity.y, s.velocity.z];
    for a in 0..3 {
        if a == axis {
            assert!(hit[a], "axis {} should bounce", a);
            assert!((v[a] + 0.08).abs() < 1e-7, "axis {} velocity {}", a, v[a]);
        } else {
            assert!(!hit[a], "axis {} should not bounce", a);
            assert_eq!(v[a], 0.1);
        }
    }
}

#[test]
fn test_sphere_inside_box_keeps_velocity() {
    let cfg = config();
    let mut s = Sphere::at_rest(Vec3::new(16.9, -16.9, 1.9), &cfg).with_velocity(Vec3::new(0.1, -0.1, 0.05));
    assert!(!reflect_bounds(&mut s, cfg.radius, &Bounds::default(), cfg.restitution).any());
    assert_eq!(s.velocity, Vec3::new(0.1, -0.1, 0.05));
}

#[test]
fn test_bounce_lands_on_same_tick() {
    // Moving right at the right wall: after one step the velocity already points left.
    let cfg = still_config();
    let s = Sphere::at_rest(Vec3::new(17.5, 0.0, 0.0), &cfg).with_velocity(Vec3::new(0.1, 0.0, 0.0));
    let mut world = World::from_spheres(cfg, vec![s]);
    let stats = world.step(0.0);
    assert_eq!(stats.wall_bounces, 1);
    let v = world.spheres()[0].velocity.x;
    assert!((v - (-0.08 * 0.98)).abs() < 1e-7, "velocity after tick {}", v);
}

// --- CONTACTS ---
#[test]
fn test_contact_separates_to_touching() {
    let cfg = config();
    let mut a = Sphere::at_rest(Vec3::new(0.0, 0.0, 0.0), &cfg);
    let mut b = Sphere::at_rest(Vec3::new(0.0, 4.0, 0.0), &cfg);
    assert!(resolve_pair(&mut a, &mut b, cfg.radius, cfg.elasticity));
    let gap = (b.position - a.position).length();
    assert!((gap - 6.0).abs() < 1e-5, "gap after separation {}", gap);
}

#[test]
fn test_contact_conserves_momentum_with_equal_masses() {
    let cfg = config();
    let mut a = Sphere::at_rest(Vec3::new(0.0, 0.0, 0.0), &cfg).with_velocity(Vec3::new(0.2, 0.05, 0.0));
    let mut b = Sphere::at_rest(Vec3::new(3.0, 3.0, 1.0), &cfg).with_velocity(Vec3::new(-0.1, 0.0, 0.02));
    let before = a.velocity + b.velocity;
    assert!(resolve_pair(&mut a, &mut b, cfg.radius, cfg.elasticity));
    let after = a.velocity + b.velocity;
    assert!((after - before).length() < 1e-6);
}

#[test]
fn test_receding_overlap_is_stopped() {
    // Overlapping but already moving apart: the impulse is applied
    // regardless of approach direction, so the pair comes to rest.
    let cfg = config();
    let mut a = Sphere::at_rest(Vec3::ZERO, &cfg).with_velocity(Vec3::new(-0.1, 0.0, 0.0));
    let mut b = Sphere::at_rest(Vec3::new(5.0, 0.0, 0.0), &cfg).with_velocity(Vec3::new(0.1, 0.0, 0.0));
    resolve_pair(&mut a, &mut b, cfg.radius, cfg.elasticity);
    assert!((a.velocity.x - 0.0).abs() < 1e-6);
    assert!((b.velocity.x - 0.0).abs() < 1e-6);
}

// --- WHOLE STEP ---
#[test]
fn test_damping_without_drift() {
    let cfg = still_config();
    let s = Sphere::at_rest(Vec3::ZERO, &cfg).with_velocity(Vec3::new(0.1, 0.0, 0.0));
    let mut world = World::from_spheres(cfg, vec![s]);
    world.step(0.0);
    let s = &world.spheres()[0];
    assert!((s.velocity.x - 0.098).abs() < 1e-7);
    assert!((s.position.x - 0.098).abs() < 1e-7);
}

#[test]
fn test_energy_decays_without_drift() {
    let mut rng = fastrand::Rng::with_seed(11);
    let mut world = World::spawn(30, still_config(), &mut rng);
    let start = world.kinetic_energy();
    for t in 0..200 {
        world.step(t as f32 / 60.0);
    }
    assert!(world.kinetic_energy() < start);
}

#[test]
fn test_population_stays_near_box() {
    let mut rng = fastrand::Rng::with_seed(5);
    let mut world = World::spawn(30, config(), &mut rng);
    for t in 0..2_000 {
        world.step(t as f32 / 60.0);
    }
    assert_eq!(world.spheres().len(), 30);
    for s in world.spheres() {
        assert!(s.position.x.abs() < 40.0 && s.position.y.abs() < 40.0 && s.position.z.abs() < 25.0,
            "sphere escaped to {:?}", s.position);
    }
}

#[test]
fn test_same_seed_same_world() {
    let run = || {
        let mut rng = fastrand::Rng::with_seed(99);
        let mut world = World::spawn(30, config(), &mut rng);
        for t in 0..50 {
            world.step(t as f32 * 0.016);
        }
        world.spheres().to_vec()
    };
    assert_eq!(run(), run());
}
