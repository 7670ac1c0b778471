mod force_generator;
mod gravity;

pub use self::force_generator::{ForceGenerator, ForceRegistry, GeneratorHandle};
pub use self::gravity::Gravity2D;
