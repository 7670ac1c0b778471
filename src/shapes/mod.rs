mod shape;
mod circle;
mod aabb;
mod oriented_box;

pub use self::shape::Shape;
pub use self::circle::Circle;
pub use self::aabb::Aabb;
pub use self::oriented_box::OrientedBox;

use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::Result;

fn validate_half_size(half_size: Vector2) -> Result<()> {
    if !(half_size.x.is_finite() && half_size.y.is_finite()) || half_size.x < 0.0 || half_size.y < 0.0 {
        return Err(PhysicsError::InvalidParameter(format!(
            "half size must be finite and non-negative, got {half_size}"
        )));
    }
    Ok(())
}
