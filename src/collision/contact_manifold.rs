use crate::math::Vector2;
use crate::shapes::{Circle, Shape};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Contact description for one colliding pair of shapes
///
/// The manifold is not linked back to the bodies; whoever produced it knows
/// which pair it belongs to. Nothing in this crate resolves manifolds into
/// impulses or position corrections.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct CollisionManifold {
    /// The contact normal, pointing from the first shape towards the second
    normal: Vector2,

    /// The contact points in world space
    contact_points: Vec<Vector2>,

    /// How far the shapes overlap along the normal
    depth: f32,

    colliding: bool,
}

impl CollisionManifold {
    /// Creates a colliding manifold with no contact points yet
    pub fn new(normal: Vector2, depth: f32) -> Self {
        Self {
            normal,
            contact_points: Vec::new(),
            depth,
            colliding: true,
        }
    }

    /// Creates a manifold describing no collision
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adds a contact point to the manifold
    pub fn add_contact_point(&mut self, contact: Vector2) {
        self.contact_points.push(contact);
    }

    pub fn get_normal(&self) -> Vector2 {
        self.normal
    }

    pub fn get_contact_points(&self) -> &[Vector2] {
        &self.contact_points
    }

    pub fn get_depth(&self) -> f32 {
        self.depth
    }

    pub fn is_colliding(&self) -> bool {
        self.colliding
    }
}

/// Builds the manifold for two circles, or `None` if they do not touch
///
/// The depth is half the overlap and the single contact point sits midway
/// through the overlapping region. Concentric circles use `+y` as the normal.
pub fn find_collision_features(a: &Circle, b: &Circle) -> Option<CollisionManifold> {
    let radii_sum = a.get_radius() + b.get_radius();
    let distance = b.get_center() - a.get_center();
    if distance.length_squared() > radii_sum * radii_sum {
        return None;
    }

    let depth = (distance.length() - radii_sum).abs() * 0.5;
    let normal = if distance.is_zero() {
        Vector2::unit_y()
    } else {
        distance.normalize()
    };

    let distance_to_point = a.get_radius() - depth;
    let contact_point = a.get_center() + normal * distance_to_point;

    let mut manifold = CollisionManifold::new(normal, depth);
    manifold.add_contact_point(contact_point);
    Some(manifold)
}
