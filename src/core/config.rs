use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for the physics simulation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The fixed time step for the simulation
    pub fixed_time_step: f32,

    /// Gravity acceleration applied to every registered body
    pub gravity: Vector2,

    /// The maximum number of fixed steps a single `advance` call may run
    pub max_substeps: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            fixed_time_step: 1.0 / 60.0,
            gravity: Vector2::new(0.0, -10.0),
            max_substeps: 8,
        }
    }
}

impl SimulationConfig {
    /// Checks that the configuration can drive a simulation
    pub fn validate(&self) -> Result<()> {
        if !self.fixed_time_step.is_finite() || self.fixed_time_step <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "fixed time step must be positive, got {}",
                self.fixed_time_step
            )));
        }
        if !(self.gravity.x.is_finite() && self.gravity.y.is_finite()) {
            return Err(PhysicsError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
