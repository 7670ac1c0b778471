pub mod config;
pub mod storage;
mod physics_system;

pub use self::config::SimulationConfig;
pub use self::storage::{BodyStorage, Storage};
pub use self::physics_system::PhysicsSystem2D;

/// A unique identifier for a body in the physics system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);
