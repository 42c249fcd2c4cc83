//! Game-level errors

use arcade_engine::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the game shell
#[derive(Error, Debug)]
pub enum GameError {
    /// One or more resources failed to load
    #[error("Failed to load resources")]
    ResourceLoad,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
