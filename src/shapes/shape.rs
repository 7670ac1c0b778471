use crate::bodies::Rigidbody2D;
use crate::math::Vector2;
use std::fmt::Debug;

/// Common view over a collision primitive bound to a rigid body
///
/// Primitives hold no spatial state of their own; position and rotation are
/// always read from the body at call time.
pub trait Shape: Debug {
    /// Returns the type name of the shape
    fn shape_type(&self) -> &'static str;

    /// Returns the body this shape is attached to
    fn get_body(&self) -> &Rigidbody2D;

    /// Returns the world-space center of the shape
    fn get_center(&self) -> Vector2 {
        self.get_body().get_position()
    }

    /// Returns whether a world-space point lies inside or on the shape
    fn contains_point(&self, point: Vector2) -> bool;
}
