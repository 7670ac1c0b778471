//! 2D collision geometry and rigid body force integration.
//!
//! Shapes ([`shapes`]) are borrowed views over [`Rigidbody2D`]s and are tested
//! against each other with the predicates and ray casts in
//! [`collision::intersection`]. [`PhysicsSystem2D`] owns the bodies and advances
//! them in fixed steps, applying every registered [`ForceGenerator`](forces::ForceGenerator).

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;
pub mod collision;
pub mod forces;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsSystem2D, SimulationConfig, BodyHandle};
pub use crate::bodies::Rigidbody2D;
pub use crate::collision::{RaycastResult, CollisionManifold};
pub use crate::math::{Vector2, Line2D, Ray2D};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
