use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A half-infinite ray with a unit direction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Ray2D {
    origin: Vector2,
    direction: Vector2,
}

impl Ray2D {
    /// Creates a new ray, normalizing `direction`
    ///
    /// `direction` must be non-zero.
    #[inline]
    pub fn new(origin: Vector2, direction: Vector2) -> Self {
        debug_assert!(!direction.is_zero(), "ray direction must be non-zero");
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Origin of the ray
    #[inline]
    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Unit direction of the ray
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Returns the point at parametric distance `t` along the ray
    #[inline]
    pub fn point_at(&self, t: f32) -> Vector2 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn direction_is_normalized() {
        let ray = Ray2D::new(Vector2::zero(), Vector2::new(3.0, 4.0));
        assert_relative_eq!(ray.direction().length(), 1.0);
        assert_relative_eq!(ray.point_at(5.0), Vector2::new(3.0, 4.0), epsilon = 1e-5);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "ray direction must be non-zero")]
    fn zero_direction_is_rejected() {
        Ray2D::new(Vector2::new(0.5, 0.0), Vector2::zero());
    }
}
