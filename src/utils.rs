use crate::{
    body::{Body, Flags, Size},
    velocity::Velocity,
    world::World,
};
use ultraviolet::DVec2;

/// Number of random boxes and of sparks in the demo scene.
pub const DEMO_BATCH: usize = 50;

/// Builds the demo scene: a floor, a shower of bouncing boxes and a burst of sparks.
/// - The floor only acts as a collider.
/// - Boxes start anywhere in the 100x100 region and collide with each other.
/// - Sparks leave a common point in random directions, faster for later ones,
///   and bounce off colliders without being colliders themselves.
pub fn demo_scenario(seed: u64) -> World {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut world = World::new();

    world.add_body(Body::new(
        DVec2::new(5.0, 90.0),
        Size::new(90.0, 5.0),
        Velocity::default(),
        1.0,
        Flags::HAS_COLLIDER,
    ));

    for _ in 0..DEMO_BATCH {
        let pos = DVec2::new(rng.f64() * 100.0, rng.f64() * 100.0);
        world.add_body(Body::new(
            pos,
            Size::new(2.0, 2.0),
            Velocity::default(),
            0.95,
            Flags::GRAVITY | Flags::HAS_COLLIDER | Flags::REACTS_COLLIDER,
        ));
    }

    for i in 0..DEMO_BATCH {
        // Random direction, speed grows with the spark's index
        let angle = std::f64::consts::PI * (rng.f64() * 2.0);
        let speed = rng.f64() * i as f64;
        world.add_body(Body::new(
            DVec2::new(50.0, 20.0),
            Size::new(1.0, 1.0),
            Velocity::new(speed, angle),
            0.9,
            Flags::GRAVITY | Flags::REACTS_COLLIDER,
        ));
    }

    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_layout() {
        let world = demo_scenario(0);
        assert_eq!(world.bodies().len(), 1 + 2 * DEMO_BATCH);
        assert_eq!(world.bodies()[0].flags, Flags::HAS_COLLIDER);

        let boxes = &world.bodies()[1..=DEMO_BATCH];
        assert!(boxes.iter().all(|b| b.size == Size::new(2.0, 2.0) && b.elasticity == 0.95));
        assert!(boxes.iter().all(|b| (0.0..100.0).contains(&b.position.x)));

        let sparks = &world.bodies()[DEMO_BATCH + 1..];
        assert!(sparks.iter().all(|b| !b.flags.contains(Flags::HAS_COLLIDER)));
        assert!(sparks.iter().enumerate().all(|(i, b)| b.velocity.magnitude <= i as f64));
    }

    #[test]
    fn same_seed_same_scene() {
        let a = demo_scenario(7);
        let b = demo_scenario(7);
        assert_eq!(a.bodies(), b.bodies());
    }

    #[test]
    fn demo_survives_a_long_run() {
        let mut world = demo_scenario(3);
        for _ in 0..600 {
            world.tick(16.0);
        }
        assert!(world.bodies().iter().all(|b| b.position.x.is_finite() && b.position.y.is_finite()));
        // the floor never reacts
        let floor = world.bodies()[0];
        assert_eq!(floor.position, DVec2::new(5.0, 90.0));
    }
}
