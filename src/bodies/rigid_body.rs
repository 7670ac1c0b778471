use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

/// A 2D rigid body: the spatial state that shapes read and the force integrator writes
#[derive(Debug, Clone, PartialEq)]
pub struct Rigidbody2D {
    /// The body's position in world space
    position: Vector2,

    /// The body's rotation in degrees (counter-clockwise)
    rotation: f32,

    /// The body's linear velocity
    linear_velocity: Vector2,

    /// The body's angular velocity in degrees per second
    angular_velocity: f32,

    /// The body's linear damping
    linear_damping: f32,

    /// The body's angular damping
    angular_damping: f32,

    /// The body's mass, 0 for an immovable body
    mass: f32,

    /// Inverse of the body's mass (0 when the mass is 0)
    inverse_mass: f32,

    /// Sum of the forces applied since the last integration step
    force_accum: Vector2,

    /// When set, the rotation is never integrated
    fixed_rotation: bool,
}

impl Default for Rigidbody2D {
    fn default() -> Self {
        Self::new(Vector2::zero())
    }
}

impl Rigidbody2D {
    /// Creates a new body of unit mass at `position`
    pub fn new(position: Vector2) -> Self {
        Self {
            position,
            rotation: 0.0,
            linear_velocity: Vector2::zero(),
            angular_velocity: 0.0,
            linear_damping: 0.0,
            angular_damping: 0.0,
            mass: 1.0,
            inverse_mass: 1.0,
            force_accum: Vector2::zero(),
            fixed_rotation: false,
        }
    }

    /// Returns the body rotated by `degrees`
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = degrees;
        self
    }

    /// Returns the body with the given mass
    pub fn with_mass(mut self, mass: f32) -> Result<Self> {
        self.set_mass(mass)?;
        Ok(self)
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's rotation in degrees
    pub fn get_rotation(&self) -> f32 {
        self.rotation
    }

    /// Sets the body's rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Returns the body's linear velocity
    pub fn get_linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's angular velocity in degrees per second
    pub fn get_angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity in degrees per second
    pub fn set_angular_velocity(&mut self, velocity: f32) {
        self.angular_velocity = velocity;
    }

    /// Sets the body's linear damping
    pub fn set_linear_damping(&mut self, damping: f32) {
        self.linear_damping = damping.max(0.0);
    }

    /// Gets the body's linear damping
    pub fn get_linear_damping(&self) -> f32 {
        self.linear_damping
    }

    /// Sets the body's angular damping
    pub fn set_angular_damping(&mut self, damping: f32) {
        self.angular_damping = damping.max(0.0);
    }

    /// Gets the body's angular damping
    pub fn get_angular_damping(&self) -> f32 {
        self.angular_damping
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    /// Sets the body's mass; a mass of 0 makes the body immovable
    pub fn set_mass(&mut self, mass: f32) -> Result<()> {
        if !mass.is_finite() || mass < 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be finite and non-negative, got {mass}"
            )));
        }

        self.mass = mass;
        self.inverse_mass = if mass > 0.0 { 1.0 / mass } else { 0.0 };
        Ok(())
    }

    /// Returns the inverse of the body's mass
    pub fn get_inverse_mass(&self) -> f32 {
        self.inverse_mass
    }

    /// Returns whether the body has a finite, non-zero mass
    pub fn has_finite_mass(&self) -> bool {
        self.inverse_mass > 0.0
    }

    pub fn is_fixed_rotation(&self) -> bool {
        self.fixed_rotation
    }

    pub fn set_fixed_rotation(&mut self, fixed: bool) {
        self.fixed_rotation = fixed;
    }

    /// Returns the forces accumulated since the last integration step
    pub fn get_accumulated_force(&self) -> Vector2 {
        self.force_accum
    }

    /// Adds a force acting on the center of mass for the next step
    pub fn add_force(&mut self, force: Vector2) {
        self.force_accum += force;
    }

    /// Drops every accumulated force
    pub fn clear_accumulators(&mut self) {
        self.force_accum = Vector2::zero();
    }

    /// Integrates the accumulated force over `dt` (semi-implicit Euler) and clears it
    ///
    /// Velocity is updated first and the new velocity moves the body.
    pub fn physics_update(&mut self, dt: f32) {
        if !self.has_finite_mass() {
            self.clear_accumulators();
            return;
        }

        let acceleration = self.force_accum * self.inverse_mass;
        self.linear_velocity += acceleration * dt;
        if self.linear_damping > 0.0 {
            self.linear_velocity *= 1.0 / (1.0 + dt * self.linear_damping);
        }
        self.position += self.linear_velocity * dt;

        if !self.fixed_rotation {
            if self.angular_damping > 0.0 {
                self.angular_velocity *= 1.0 / (1.0 + dt * self.angular_damping);
            }
            self.rotation += self.angular_velocity * dt;
        }

        self.clear_accumulators();
    }
}
