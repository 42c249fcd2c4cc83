//! Components shared by simulated entities

pub mod lifetime;
pub mod movement;

pub use lifetime::Lifetime;
pub use movement::MovementComponent;
