//! Collision geometry
//!
//! - [`primitives`] - Basic geometric primitives (circles, triangles)
//! - [`shape`] - The world-space shape attached to a collider

pub mod primitives;
pub mod shape;

pub use primitives::{BoundingCircle, Triangle};
pub use shape::CollisionShape;
