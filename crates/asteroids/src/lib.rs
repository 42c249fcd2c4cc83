//! # Asteroids
//!
//! The classic arcade game on top of `arcade_engine`: a ship, asteroids that
//! split when shot, and a toroidal play-field.
//!
//! Rendering, audio and input are reached only through the traits in
//! [`platform`] and [`input`], so the whole game runs headless.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::must_use_candidate)]

pub mod components;
pub mod config;
pub mod display;
pub mod error;
pub mod game;
pub mod game_object;
pub mod input;
pub mod platform;
pub mod session;
pub mod world;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use error::GameError;
pub use game::Game;
pub use game_object::GameObject;
pub use session::{SessionEvent, SessionState};
pub use world::GameWorld;
