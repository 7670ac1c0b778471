use crate::bodies::Rigidbody2D;
use crate::collision::intersection;
use crate::math::{self, Vector2};
use crate::shapes::{validate_half_size, Shape};
use crate::Result;

/// A box centered on its body's position and rotated by the body's rotation
#[derive(Debug, Clone, Copy)]
pub struct OrientedBox<'a> {
    body: &'a Rigidbody2D,
    half_size: Vector2,
}

impl<'a> OrientedBox<'a> {
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

    /// Returns the box rotation in degrees
    pub fn get_rotation(&self) -> f32 {
        self.body.get_rotation()
    }

    /// Returns the minimum corner of the unrotated box, in world space
    pub fn get_local_min(&self) -> Vector2 {
        self.body.get_position() - self.half_size
    }

    /// Returns the maximum corner of the unrotated box, in world space
    pub fn get_local_max(&self) -> Vector2 {
        self.body.get_position() + self.half_size
    }

    /// Returns the four world-space corners, rotated about the center
    pub fn get_vertices(&self) -> [Vector2; 4] {
        let min = self.get_local_min();
        let max = self.get_local_max();
        let mut vertices = [
            Vector2::new(min.x, min.y),
            Vector2::new(min.x, max.y),
            Vector2::new(max.x, min.y),
            Vector2::new(max.x, max.y),
        ];

        let rotation = self.get_rotation();
        if rotation != 0.0 {
            let center = self.body.get_position();
            for vertex in &mut vertices {
                math::rotate(vertex, rotation, center);
            }
        }

        vertices
    }

    /// Returns the box's local x and y axes in world space
    pub fn get_axes(&self) -> [Vector2; 2] {
        let rotation = self.get_rotation();
        [
            math::rotated(Vector2::unit_x(), rotation, Vector2::zero()),
            math::rotated(Vector2::unit_y(), rotation, Vector2::zero()),
        ]
    }

    /// Maps a world-space point into the box's unrotated frame (still centered on the body)
    pub fn to_local(&self, point: Vector2) -> Vector2 {
        math::rotated(point, -self.get_rotation(), self.body.get_position())
    }
}

impl Shape for OrientedBox<'_> {
    fn shape_type(&self) -> &'static str {
        "OrientedBox"
    }

    fn get_body(&self) -> &Rigidbody2D {
        self.body
    }

    fn contains_point(&self, point: Vector2) -> bool {
        intersection::point_in_box2d(point, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn unrotated_vertices_are_the_corners() {
        let body = Rigidbody2D::new(Vector2::new(1.0, 1.0));
        let obb = OrientedBox::new(&body, Vector2::new(1.0, 2.0)).unwrap();
        let vertices = obb.get_vertices();
        assert_eq!(vertices[0], Vector2::new(0.0, -1.0));
        assert_eq!(vertices[3], Vector2::new(2.0, 3.0));
    }

    #[test]
    fn rotated_vertices_turn_about_the_center() {
        let body = Rigidbody2D::new(Vector2::zero()).with_rotation(45.0);
        let obb = OrientedBox::new(&body, Vector2::new(1.0, 1.0)).unwrap();
        let diagonal = std::f32::consts::SQRT_2;

        let vertices = obb.get_vertices();
        assert_abs_diff_eq!(vertices[0], Vector2::new(0.0, -diagonal), epsilon = 1e-5);
        assert_abs_diff_eq!(vertices[1], Vector2::new(-diagonal, 0.0), epsilon = 1e-5);
        assert_abs_diff_eq!(vertices[2], Vector2::new(diagonal, 0.0), epsilon = 1e-5);
        assert_abs_diff_eq!(vertices[3], Vector2::new(0.0, diagonal), epsilon = 1e-5);
    }

    #[test]
    fn to_local_undoes_rotation() {
        let body = Rigidbody2D::new(Vector2::new(2.0, 0.0)).with_rotation(90.0);
        let obb = OrientedBox::new(&body, Vector2::new(1.0, 1.0)).unwrap();
        // The box's local +x axis points along world +y
        assert_abs_diff_eq!(obb.to_local(Vector2::new(2.0, 1.0)), Vector2::new(3.0, 0.0), epsilon = 1e-5);
    }
}
