use crate::bodies::Rigidbody2D;
use crate::collision::intersection;
use crate::error::PhysicsError;
use crate::math::Vector2;
use crate::shapes::Shape;
use crate::Result;

/// A circle centered on its body's position
#[derive(Debug, Clone, Copy)]
pub struct Circle<'a> {
    body: &'a Rigidbody2D,
    radius: f32,
}

impl<'a> Circle<'a> {
    /// Creates a circle of `radius` around `body`
    pub fn new(body: &'a Rigidbody2D, radius: f32) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { body, radius })
    }

    /// Returns the radius of the circle
    pub fn get_radius(&self) -> f32 {
        self.radius
    }
}

impl Shape for Circle<'_> {
    fn shape_type(&self) -> &'static str {
        "Circle"
    }

    fn get_body(&self) -> &Rigidbody2D {
        self.body
    }

    fn contains_point(&self, point: Vector2) -> bool {
        intersection::point_in_circle(point, self)
    }
}
