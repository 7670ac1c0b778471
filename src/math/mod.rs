mod vector;
mod line;
mod ray;

pub use vector::Vector2;
pub use line::Line2D;
pub use ray::Ray2D;

use nalgebra as na;

/// Constant for a very small number, used when normalizing vectors
pub const EPSILON: f32 = 1.0e-6;

/// The smallest positive value an `f32` can represent (the subnormal step above zero).
///
/// [`compare`] scales this by the magnitude of its operands, so in practice it only
/// accepts values that are bitwise equal or differ by a single subnormal step.
pub const MIN_STEP: f32 = 1.401_298_5e-45;

/// Reciprocal stand-in used by the slab tests when a direction component is exactly zero
pub const PARALLEL_SUBSTITUTE: f32 = 0.00001;

/// Returns true if `a` and `b` are equal within `epsilon`, scaled by `max(1, |a|, |b|)`
#[inline]
pub fn compare_with(a: f32, b: f32, epsilon: f32) -> bool {
    (a - b).abs() <= epsilon * 1.0f32.max(a.abs().max(b.abs()))
}

/// Returns true if `a` and `b` are equal to within [`MIN_STEP`] relative precision
#[inline]
pub fn compare(a: f32, b: f32) -> bool {
    compare_with(a, b, MIN_STEP)
}

/// Componentwise [`compare_with`]
#[inline]
pub fn compare_vectors_with(a: Vector2, b: Vector2, epsilon: f32) -> bool {
    compare_with(a.x, b.x, epsilon) && compare_with(a.y, b.y, epsilon)
}

/// Componentwise [`compare`]
#[inline]
pub fn compare_vectors(a: Vector2, b: Vector2) -> bool {
    compare(a.x, b.x) && compare(a.y, b.y)
}

/// Rotates `point` in place about `origin` by `angle_degrees` (counter-clockwise)
pub fn rotate(point: &mut Vector2, angle_degrees: f32, origin: Vector2) {
    let rotation = na::Rotation2::new(to_radians(angle_degrees));
    let local = (*point - origin).to_nalgebra();
    *point = Vector2::from_nalgebra(&(rotation * local)) + origin;
}

/// Returns `point` rotated about `origin` by `angle_degrees`
#[inline]
pub fn rotated(point: Vector2, angle_degrees: f32, origin: Vector2) -> Vector2 {
    let mut result = point;
    rotate(&mut result, angle_degrees, origin);
    result
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
