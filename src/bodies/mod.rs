mod rigid_body;

pub use self::rigid_body::Rigidbody2D;
