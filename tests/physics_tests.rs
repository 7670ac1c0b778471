use phys2d::forces::ForceGenerator;
use phys2d::{PhysicsSystem2D, Rigidbody2D, SimulationConfig, Vector2};
use approx::assert_relative_eq;
use std::any::Any;

/// Constant push used to check that extra generators reach their bodies
#[derive(Debug)]
struct Wind {
    force: Vector2,
}

impl ForceGenerator for Wind {
    fn generator_type(&self) -> &'static str {
        "Wind"
    }

    fn update_force(&self, body: &mut Rigidbody2D, _dt: f32) {
        body.add_force(self.force);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[test]
fn test_rigid_body_creation() {
    let body = Rigidbody2D::new(Vector2::new(0.0, 10.0));

    assert_eq!(body.get_position(), Vector2::new(0.0, 10.0));
    assert_eq!(body.get_rotation(), 0.0);
    assert!(body.get_linear_velocity().is_zero());
    assert_eq!(body.get_mass(), 1.0);
    assert!(body.has_finite_mass());

    assert!(Rigidbody2D::default().with_mass(-2.0).is_err());
}

#[test]
fn test_single_gravity_step() {
    let dt = 1.0 / 60.0;
    let mut system = PhysicsSystem2D::new(dt, Vector2::new(0.0, -10.0)).unwrap();
    let body = Rigidbody2D::new(Vector2::zero()).with_mass(2.0).unwrap();
    let handle = system.add_rigidbody(body);

    system.update(dt);

    let body = system.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity().y, -10.0 / 60.0, epsilon = 1e-6);
    assert_relative_eq!(body.get_linear_velocity().x, 0.0);
    assert!(body.get_position().y < 0.0);
    assert_relative_eq!(body.get_position().y, -10.0 / 3600.0, epsilon = 1e-6);
    assert!(body.get_accumulated_force().is_zero());
}

#[test]
fn test_gravity_simulation() {
    let time_step = 1.0 / 60.0;
    let mut system = PhysicsSystem2D::new(time_step, Vector2::new(0.0, -9.81)).unwrap();
    let handle = system.add_rigidbody(Rigidbody2D::new(Vector2::new(0.0, 10.0)));

    let mut expected_position = Vector2::new(0.0, 10.0);
    let mut expected_velocity = Vector2::zero();

    for _ in 0..60 {
        system.update(time_step);

        expected_velocity.y -= 9.81 * time_step;
        expected_position.y += expected_velocity.y * time_step;

        let body = system.get_body(handle).unwrap();
        assert_relative_eq!(body.get_linear_velocity().y, expected_velocity.y, epsilon = 1e-4);
        assert_relative_eq!(body.get_position().y, expected_position.y, epsilon = 1e-4);
    }

    assert_relative_eq!(system.get_time(), 1.0, epsilon = 1e-4);
}

#[test]
fn test_gravity_is_independent_of_mass() {
    let mut system = PhysicsSystem2D::new(0.1, Vector2::new(0.0, -10.0)).unwrap();
    let light = system.add_rigidbody(Rigidbody2D::default().with_mass(0.5).unwrap());
    let heavy = system.add_rigidbody(Rigidbody2D::default().with_mass(50.0).unwrap());

    for _ in 0..10 {
        system.update(0.1);
    }

    let light = system.get_body(light).unwrap();
    let heavy = system.get_body(heavy).unwrap();
    assert_relative_eq!(light.get_linear_velocity().y, -10.0, epsilon = 1e-4);
    assert_relative_eq!(
        light.get_position().y,
        heavy.get_position().y,
        epsilon = 1e-4
    );
}

#[test]
fn test_zero_mass_body_stays_put() {
    let mut system = PhysicsSystem2D::new(0.5, Vector2::new(0.0, -10.0)).unwrap();
    let ground = system.add_rigidbody(Rigidbody2D::new(Vector2::new(1.0, 2.0)).with_mass(0.0).unwrap());

    for _ in 0..4 {
        system.update(0.5);
    }

    let ground = system.get_body(ground).unwrap();
    assert_eq!(ground.get_position(), Vector2::new(1.0, 2.0));
    assert!(ground.get_linear_velocity().is_zero());
}

#[test]
fn test_custom_generator_only_acts_on_registered_bodies() {
    let mut system = PhysicsSystem2D::new(1.0, Vector2::zero()).unwrap();
    let pushed = system.add_rigidbody(Rigidbody2D::default());
    let still = system.add_rigidbody(Rigidbody2D::default());

    let wind = system.add_force_generator(Box::new(Wind {
        force: Vector2::new(2.0, 0.0),
    }));
    assert!(system.register(pushed, wind).unwrap());
    // Pairing twice has no extra effect
    assert!(!system.register(pushed, wind).unwrap());

    system.update(1.0);
    assert_relative_eq!(system.get_body(pushed).unwrap().get_linear_velocity().x, 2.0);
    assert!(system.get_body(still).unwrap().get_linear_velocity().is_zero());

    assert!(system.unregister(pushed, wind));
    system.update(1.0);
    assert_relative_eq!(system.get_body(pushed).unwrap().get_linear_velocity().x, 2.0);
}

#[test]
fn test_register_rejects_unknown_handles() {
    let mut system = PhysicsSystem2D::new(1.0, Vector2::zero()).unwrap();
    let handle = system.add_rigidbody(Rigidbody2D::default());
    let wind = system.add_force_generator(Box::new(Wind { force: Vector2::unit_x() }));

    system.remove_rigidbody(handle).unwrap();
    assert!(system.register(handle, wind).is_err());
    assert!(system.remove_rigidbody(handle).is_err());
}

#[test]
fn test_clear_keeps_extra_generators() {
    let mut system = PhysicsSystem2D::new(1.0, Vector2::new(0.0, -1.0)).unwrap();
    let wind = system.add_force_generator(Box::new(Wind { force: Vector2::unit_x() }));
    let handle = system.add_rigidbody(Rigidbody2D::default());
    system.register(handle, wind).unwrap();

    system.clear();
    assert_eq!(system.body_count(), 0);
    assert!(system.get_force_registry().is_empty());

    let fresh = system.add_rigidbody(Rigidbody2D::default());
    system.register(fresh, wind).unwrap();
    system.update(1.0);

    let velocity = system.get_body(fresh).unwrap().get_linear_velocity();
    assert_relative_eq!(velocity.x, 1.0);
    assert_relative_eq!(velocity.y, -1.0);
}

#[test]
fn test_advance_uses_fixed_steps() {
    let config = SimulationConfig {
        fixed_time_step: 0.25,
        gravity: Vector2::new(0.0, -4.0),
        max_substeps: 8,
    };
    let mut system = PhysicsSystem2D::with_config(config).unwrap();
    let handle = system.add_rigidbody(Rigidbody2D::default());

    assert_eq!(system.advance(1.0), 4);
    assert_relative_eq!(system.get_body(handle).unwrap().get_linear_velocity().y, -4.0);
    assert_relative_eq!(system.get_time(), 1.0);
}
