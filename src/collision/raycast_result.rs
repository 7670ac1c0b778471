use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Reusable record of a ray cast hit
///
/// Every cast resets the record before testing, so a single instance can be
/// passed to any number of casts without reallocating.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RaycastResult {
    point: Vector2,
    normal: Vector2,
    t: f32,
    hit: bool,
}

impl Default for RaycastResult {
    fn default() -> Self {
        Self::new()
    }
}

impl RaycastResult {
    /// Creates a record in the "no hit" state
    pub fn new() -> Self {
        Self {
            point: Vector2::zero(),
            normal: Vector2::zero(),
            t: -1.0,
            hit: false,
        }
    }

    /// Fills the record
    pub fn init(&mut self, point: Vector2, normal: Vector2, t: f32, hit: bool) {
        self.point = point;
        self.normal = normal;
        self.t = t;
        self.hit = hit;
    }

    /// Restores the "no hit" state: zero point and normal, `t = -1`
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// World-space hit point
    pub fn get_point(&self) -> Vector2 {
        self.point
    }

    /// Surface normal at the hit point
    pub fn get_normal(&self) -> Vector2 {
        self.normal
    }

    /// Parametric distance along the ray, -1 when nothing was hit
    pub fn get_t(&self) -> f32 {
        self.t
    }

    /// Whether the last cast hit anything
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}
