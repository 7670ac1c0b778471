pub mod intersection;
mod raycast_result;
mod contact_manifold;

pub use self::raycast_result::RaycastResult;
pub use self::contact_manifold::{CollisionManifold, find_collision_features};
