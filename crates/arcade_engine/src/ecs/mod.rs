//! Entity identity and per-entity components
//!
//! The simulation keeps its entities in a single owning collection; everything
//! else refers to them by [`Entity`] id for the duration of one tick.

mod entity;
pub mod components;

pub use entity::{Entity, EntityAllocator};
pub use components::{Lifetime, MovementComponent};
