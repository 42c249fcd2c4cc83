//! Spatial partitioning data structures
//!
//! Provides spatial indexing for broad-phase collision detection in 2D.

mod quadtree;
pub mod spatial_query;

pub use quadtree::{QuadTree, QuadTreeConfig, QuadTreeEntry, QuadTreeNode};
pub use spatial_query::SpatialQuery;
