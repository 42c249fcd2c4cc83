//! # Arcade Engine
//!
//! The game-agnostic core of a 2D arcade simulation on a toroidal play-field.
//!
//! ## Features
//!
//! - **Spatial Indexing**: A quadtree rebuilt every tick for broad-phase queries
//! - **Collision Detection**: Layer-filtered broad-phase plus exact shape tests
//! - **Toroidal Math**: Wrap-around positions and heading helpers
//! - **Configuration**: TOML/RON backed configuration loading
//!
//! ## Quick Start
//!
//! ```rust
//! use arcade_engine::prelude::*;
//!
//! let field = Aabb2::new(Vec2::zeros(), Vec2::new(800.0, 600.0));
//! let mut collisions = CollisionManager::new(Box::new(QuadTree::new(field, QuadTreeConfig::default())));
//!
//! let a = Collider::circle(Entity::new(0), Vec2::new(100.0, 100.0), 10.0)
//!     .with_layers(CollisionLayers::PLAYER, CollisionLayers::ENEMY);
//! let b = Collider::circle(Entity::new(1), Vec2::new(105.0, 100.0), 10.0)
//!     .with_layers(CollisionLayers::ENEMY, CollisionLayers::PLAYER);
//!
//! let report = collisions.detect(&[a, b]);
//! assert_eq!(report.flagged.len(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod ecs;
pub mod spatial;
pub mod physics;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{Entity, EntityAllocator},
        foundation::{
            math::{Aabb2, Vec2},
            time::Timer,
        },
        physics::{Collider, CollisionLayers, CollisionManager, CollisionPair, CollisionReport, CollisionShape},
        spatial::{QuadTree, QuadTreeConfig, SpatialQuery},
    };
}
