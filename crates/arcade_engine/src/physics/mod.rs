//! Physics module for collision detection
//!
//! Provides broad-phase collision detection through a rebuilt-per-tick
//! quadtree, layer filtering, and narrow-phase tests for circles and
//! triangles. Collisions are binary: a pair either touches or it doesn't.

pub mod collision;
pub mod collision_layers;
pub mod collision_system;

pub use collision::{BoundingCircle, CollisionShape, Triangle};
pub use collision_layers::CollisionLayers;
pub use collision_system::{Collider, CollisionManager, CollisionPair, CollisionReport};
