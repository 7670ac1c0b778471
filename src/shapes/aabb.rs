use crate::bodies::Rigidbody2D;
use crate::collision::intersection;
use crate::math::Vector2;
use crate::shapes::{validate_half_size, Shape};
use crate::Result;

/// An axis-aligned box centered on its body's position
///
/// The body's rotation is ignored.
#[derive(Debug, Clone, Copy)]
pub struct Aabb<'a> {
    body: &'a Rigidbody2D,
    half_size: Vector2,
}

impl<'a> Aabb<'a> {
    /// Creates a box with the given half extents around `body`
    pub fn new(body: &'a Rigidbody2D, half_size: Vector2) -> Result<Self> {
        validate_half_size(half_size)?;
        Ok(Self { body, half_size })
    }

    /// Creates a box with the given full extents around `body`
    pub fn from_size(body: &'a Rigidbody2D, size: Vector2) -> Result<Self> {
        Self::new(body, size * 0.5)
    }

    /// Returns the half extents of the box
    pub fn get_half_size(&self) -> Vector2 {
        self.half_size
    }

    /// Returns the world-space minimum corner
    pub fn get_min(&self) -> Vector2 {
        self.body.get_position() - self.half_size
    }

    /// Returns the world-space maximum corner
    pub fn get_max(&self) -> Vector2 {
        self.body.get_position() + self.half_size
    }

    /// Returns the four corners: (min, min), (min, max), (max, min), (max, max)
    pub fn get_vertices(&self) -> [Vector2; 4] {
        let min = self.get_min();
        let max = self.get_max();
        [
            Vector2::new(min.x, min.y),
            Vector2::new(min.x, max.y),
            Vector2::new(max.x, min.y),
            Vector2::new(max.x, max.y),
        ]
    }
}

impl Shape for Aabb<'_> {
    fn shape_type(&self) -> &'static str {
        "Aabb"
    }

    fn get_body(&self) -> &Rigidbody2D {
        self.body
    }

    fn contains_point(&self, point: Vector2) -> bool {
        intersection::point_in_aabb(point, self)
    }
}
