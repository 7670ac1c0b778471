use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A line segment between two points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Line2D {
    /// Start of the segment
    pub start: Vector2,

    /// End of the segment
    pub end: Vector2,
}

impl Line2D {
    /// Creates a new segment from `start` to `end`
    #[inline]
    pub fn new(start: Vector2, end: Vector2) -> Self {
        Self { start, end }
    }

    /// Returns the vector from start to end
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the squared length of the segment
    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.direction().length_squared()
    }

    /// Returns the length of the segment
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}
