use crate::bodies::Rigidbody2D;
use crate::forces::ForceGenerator;
use crate::math::Vector2;
use std::any::Any;

/// A force generator that applies uniform gravity (F = m * g)
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity2D {
    /// The gravity acceleration vector
    gravity: Vector2,
}

impl Gravity2D {
    /// Creates a new gravity force generator with the given acceleration
    pub fn new(gravity: Vector2) -> Self {
        Self { gravity }
    }

    /// Gets the current gravity acceleration
    pub fn get_gravity(&self) -> Vector2 {
        self.gravity
    }

    /// Sets the gravity acceleration vector
    pub fn set_gravity(&mut self, gravity: Vector2) {
        self.gravity = gravity;
    }
}

impl ForceGenerator for Gravity2D {
    fn generator_type(&self) -> &'static str {
        "Gravity"
    }

    fn update_force(&self, body: &mut Rigidbody2D, _dt: f32) {
        body.add_force(self.gravity * body.get_mass());
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
