//! Intersection predicates and ray casts over the 2D primitives.
//!
//! Every function here is pure: it reads the current state of the bodies the
//! primitives are attached to and never mutates them. Boundaries are inclusive
//! throughout, so touching shapes intersect.

use crate::collision::RaycastResult;
use crate::math::{self, Line2D, Ray2D, Vector2, PARALLEL_SUBSTITUTE};
use crate::shapes::{Aabb, Circle, OrientedBox, Shape};

// ==========================================
// Point vs. primitive
// ==========================================

/// Returns whether `point` lies on the infinite line through `line`
///
/// Vertical lines compare the x coordinate with [`math::compare`]. Other lines
/// test the slope-intercept equation with exact float equality, which only holds
/// for points that land precisely on the line; callers that need a tolerance
/// should measure the distance to the line themselves.
#[allow(clippy::float_cmp)]
pub fn point_on_line(point: Vector2, line: &Line2D) -> bool {
    let dy = line.end.y - line.start.y;
    let dx = line.end.x - line.start.x;

    if dx == 0.0 {
        return math::compare(point.x, line.start.x);
    }

    let slope = dy / dx;
    let intercept = line.end.y - slope * line.end.x;

    point.y == slope * point.x + intercept
}

/// Returns whether `point` is inside or on `circle`
pub fn point_in_circle(point: Vector2, circle: &Circle) -> bool {
    let center_to_point = point - circle.get_center();
    center_to_point.length_squared() <= circle.get_radius() * circle.get_radius()
}

/// Returns whether `point` is inside or on `aabb`
pub fn point_in_aabb(point: Vector2, aabb: &Aabb) -> bool {
    point_in_bounds(point, aabb.get_min(), aabb.get_max())
}

/// Returns whether `point` is inside or on the rotated footprint of `obb`
///
/// The point is brought into the box's frame with the inverse of the rotation
/// that [`OrientedBox::get_vertices`] applies to the corners.
pub fn point_in_box2d(point: Vector2, obb: &OrientedBox) -> bool {
    let local = obb.to_local(point);
    point_in_bounds(local, obb.get_local_min(), obb.get_local_max())
}

// ==========================================
// Line vs. primitive
// ==========================================

/// Returns whether the segment `line` touches `circle`
pub fn line_and_circle(line: &Line2D, circle: &Circle) -> bool {
    if point_in_circle(line.start, circle) || point_in_circle(line.end, circle) {
        return true;
    }

    let ab = line.direction();
    let length_squared = ab.length_squared();
    if length_squared == 0.0 {
        // Degenerate segment: already covered by the endpoint test
        return false;
    }

    // Project the circle center onto the segment, parameterised by t
    let start_to_center = circle.get_center() - line.start;
    let t = start_to_center.dot(&ab) / length_squared;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    let closest = line.start + ab * t;
    point_in_circle(closest, circle)
}

/// Returns whether the segment `line` touches `aabb`
pub fn line_and_aabb(line: &Line2D, aabb: &Aabb) -> bool {
    segment_and_bounds(line, aabb.get_min(), aabb.get_max())
}

/// Returns whether the segment `line` touches the rotated footprint of `obb`
pub fn line_and_box2d(line: &Line2D, obb: &OrientedBox) -> bool {
    let local_line = Line2D::new(obb.to_local(line.start), obb.to_local(line.end));
    segment_and_bounds(&local_line, obb.get_local_min(), obb.get_local_max())
}

// ==========================================
// Circle vs. primitive
// ==========================================

/// Same as [`line_and_circle`] with the arguments swapped
pub fn circle_and_line(circle: &Circle, line: &Line2D) -> bool {
    line_and_circle(line, circle)
}

/// Returns whether two circles overlap or touch
pub fn circle_and_circle(a: &Circle, b: &Circle) -> bool {
    let between_centers = a.get_center() - b.get_center();
    let radii_sum = a.get_radius() + b.get_radius();
    between_centers.length_squared() <= radii_sum * radii_sum
}

/// Returns whether `circle` overlaps or touches `aabb`
pub fn circle_and_aabb(circle: &Circle, aabb: &Aabb) -> bool {
    let center = circle.get_center();
    let closest = closest_point_in_bounds(center, aabb.get_min(), aabb.get_max());
    (center - closest).length_squared() <= circle.get_radius() * circle.get_radius()
}

/// Returns whether `circle` overlaps or touches the rotated footprint of `obb`
///
/// The test runs in the box's local frame, shifted so the box spans
/// `[0, 2 * half_size]`.
pub fn circle_and_box2d(circle: &Circle, obb: &OrientedBox) -> bool {
    let half_size = obb.get_half_size();
    let min = Vector2::zero();
    let max = half_size * 2.0;

    let relative = circle.get_center() - obb.get_center();
    let local_center = math::rotated(relative, -obb.get_rotation(), Vector2::zero()) + half_size;

    let closest = closest_point_in_bounds(local_center, min, max);
    (local_center - closest).length_squared() <= circle.get_radius() * circle.get_radius()
}

// ==========================================
// Box vs. primitive (separating axis theorem)
// ==========================================

/// Same as [`circle_and_aabb`] with the arguments swapped
pub fn aabb_and_circle(aabb: &Aabb, circle: &Circle) -> bool {
    circle_and_aabb(circle, aabb)
}

/// Returns whether two axis-aligned boxes overlap or touch
pub fn aabb_and_aabb(a: &Aabb, b: &Aabb) -> bool {
    let axes = [Vector2::unit_y(), Vector2::unit_x()];
    let (va, vb) = (a.get_vertices(), b.get_vertices());
    axes.iter().all(|axis| overlap_on_axis(&va, &vb, *axis))
}

/// Returns whether an axis-aligned box and an oriented box overlap or touch
///
/// Tests the two world axes and the two local axes of `obb`.
pub fn aabb_and_box2d(aabb: &Aabb, obb: &OrientedBox) -> bool {
    let [box_x, box_y] = obb.get_axes();
    let axes = [Vector2::unit_y(), Vector2::unit_x(), box_y, box_x];
    let (va, vb) = (aabb.get_vertices(), obb.get_vertices());
    axes.iter().all(|axis| overlap_on_axis(&va, &vb, *axis))
}

/// Same as [`circle_and_box2d`] with the arguments swapped
pub fn box2d_and_circle(obb: &OrientedBox, circle: &Circle) -> bool {
    circle_and_box2d(circle, obb)
}

/// Same as [`aabb_and_box2d`] with the arguments swapped
pub fn box2d_and_aabb(obb: &OrientedBox, aabb: &Aabb) -> bool {
    aabb_and_box2d(aabb, obb)
}

/// Returns whether two oriented boxes overlap or touch, testing the local axes of both
pub fn box2d_and_box2d(a: &OrientedBox, b: &OrientedBox) -> bool {
    let [ax, ay] = a.get_axes();
    let [bx, by] = b.get_axes();
    let (va, vb) = (a.get_vertices(), b.get_vertices());
    [ax, ay, bx, by].iter().all(|axis| overlap_on_axis(&va, &vb, *axis))
}

// ==========================================
// Ray casts
// ==========================================

/// Casts `ray` against `circle`
///
/// A ray that starts inside the circle reports where it leaves. Hits behind the
/// origin are misses.
pub fn raycast_circle(circle: &Circle, ray: &Ray2D, mut result: Option<&mut RaycastResult>) -> bool {
    if let Some(result) = result.as_deref_mut() {
        result.reset();
    }

    let origin_to_circle = circle.get_center() - ray.origin();
    let radius_squared = circle.get_radius() * circle.get_radius();
    let origin_to_circle_length_squared = origin_to_circle.length_squared();

    // Project the origin-to-center vector onto the ray direction
    let a = origin_to_circle.dot(&ray.direction());
    let b_squared = origin_to_circle_length_squared - a * a;
    if radius_squared - b_squared < 0.0 {
        return false;
    }

    let f = (radius_squared - b_squared).sqrt();
    let t = if origin_to_circle_length_squared < radius_squared {
        a + f
    } else {
        a - f
    };
    if t < 0.0 {
        return false;
    }

    if let Some(result) = result {
        let point = ray.point_at(t);
        let normal = (point - circle.get_center()).normalize();
        result.init(point, normal, t, true);
    }

    true
}

/// Casts `ray` against `aabb`
///
/// The reported normal points from the hit point back to the ray origin rather
/// than being the normal of the face that was struck.
pub fn raycast_aabb(aabb: &Aabb, ray: &Ray2D, result: Option<&mut RaycastResult>) -> bool {
    cast_against_bounds(
        ray.origin(),
        ray.direction(),
        aabb.get_min(),
        aabb.get_max(),
        ray,
        result,
    )
}

/// Casts `ray` against the rotated footprint of `obb`
///
/// The slab test runs in the box's local frame; the hit point and normal are
/// reported in world space with the same simplified normal as [`raycast_aabb`].
pub fn raycast_box2d(obb: &OrientedBox, ray: &Ray2D, result: Option<&mut RaycastResult>) -> bool {
    let local_origin = obb.to_local(ray.origin());
    let local_direction = math::rotated(ray.direction(), -obb.get_rotation(), Vector2::zero());
    cast_against_bounds(
        local_origin,
        local_direction,
        obb.get_local_min(),
        obb.get_local_max(),
        ray,
        result,
    )
}

// ==========================================
// Helpers
// ==========================================

#[inline]
fn point_in_bounds(point: Vector2, min: Vector2, max: Vector2) -> bool {
    point.x <= max.x && min.x <= point.x && point.y <= max.y && min.y <= point.y
}

#[inline]
fn closest_point_in_bounds(point: Vector2, min: Vector2, max: Vector2) -> Vector2 {
    Vector2::new(
        math::clamp(point.x, min.x, max.x),
        math::clamp(point.y, min.y, max.y),
    )
}

/// Projects `vertices` onto `axis` and returns the covered `(min, max)` interval
fn interval(vertices: &[Vector2; 4], axis: Vector2) -> (f32, f32) {
    let first = axis.dot(&vertices[0]);
    vertices[1..].iter().fold((first, first), |(min, max), vertex| {
        let projection = axis.dot(vertex);
        (min.min(projection), max.max(projection))
    })
}

fn overlap_on_axis(a: &[Vector2; 4], b: &[Vector2; 4], axis: Vector2) -> bool {
    let (min_a, max_a) = interval(a, axis);
    let (min_b, max_b) = interval(b, axis);
    min_b <= max_a && min_a <= max_b
}

/// Slab test of a ray against `[min, max]`, returning the merged `(t_min, t_max)`
///
/// `direction` must be normalized. A zero direction component is replaced by
/// [`PARALLEL_SUBSTITUTE`] once the origin is known to lie within that slab; an
/// origin outside a slab it runs parallel to can never hit.
fn slab_interval(origin: Vector2, direction: Vector2, min: Vector2, max: Vector2) -> Option<(f32, f32)> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..2 {
        let o = origin.get(axis);
        let mut d = direction.get(axis);

        if math::compare(d, 0.0) {
            if o < min.get(axis) || o > max.get(axis) {
                return None;
            }
            d = PARALLEL_SUBSTITUTE;
        }

        let t1 = (min.get(axis) - o) / d;
        let t2 = (max.get(axis) - o) / d;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));
    }

    if t_max < 0.0 || t_min > t_max {
        None
    } else {
        Some((t_min, t_max))
    }
}

/// Picks the entry distance, or the exit distance when the origin is inside
#[inline]
fn first_positive(t_min: f32, t_max: f32) -> f32 {
    if t_min < 0.0 {
        t_max
    } else {
        t_min
    }
}

fn segment_and_bounds(line: &Line2D, min: Vector2, max: Vector2) -> bool {
    if point_in_bounds(line.start, min, max) || point_in_bounds(line.end, min, max) {
        return true;
    }

    let direction = line.direction().normalize();
    match slab_interval(line.start, direction, min, max) {
        Some((t_min, t_max)) => {
            let t = first_positive(t_min, t_max);
            t > 0.0 && t * t < line.length_squared()
        }
        None => false,
    }
}

/// Slab cast in whatever frame `origin`/`direction` are expressed in, reporting
/// the hit along the world-space `ray`
fn cast_against_bounds(
    origin: Vector2,
    direction: Vector2,
    min: Vector2,
    max: Vector2,
    ray: &Ray2D,
    mut result: Option<&mut RaycastResult>,
) -> bool {
    if let Some(result) = result.as_deref_mut() {
        result.reset();
    }

    let Some((t_min, t_max)) = slab_interval(origin, direction, min, max) else {
        return false;
    };

    let t = first_positive(t_min, t_max);
    if t <= 0.0 {
        return false;
    }

    if let Some(result) = result {
        let point = ray.point_at(t);
        let normal = (ray.origin() - point).normalize();
        result.init(point, normal, t, true);
    }

    true
}
