//! Game configuration
//!
//! Every section has sensible defaults, so a config file only needs the
//! values it wants to change. Files are TOML or RON, picked by extension.

use std::path::Path;

use arcade_engine::config::Config;
use arcade_engine::foundation::math::{Aabb2, Vec2};
use arcade_engine::spatial::QuadTreeConfig;
use serde::{Deserialize, Serialize};

use crate::components::AsteroidSize;

/// Top-level game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Play-field settings
    pub field: FieldConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Player ship settings
    pub ship: ShipConfig,

    /// Projectile settings
    pub projectile: ProjectileConfig,

    /// Broad-phase spatial index settings
    pub spatial: QuadTreeConfig,

    /// Resource file locations
    pub resources: ResourceConfig,
}

impl Config for GameConfig {}

/// Play-field configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field width in world units
    pub width: f32,

    /// Field height in world units
    pub height: f32,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Large asteroids spawned at session start
    pub starting_asteroids: u32,

    /// Asteroid speed in units per second
    pub asteroid_speed: f32,

    /// Radius of a large asteroid
    pub large_asteroid_radius: f32,

    /// Radius of a medium asteroid
    pub medium_asteroid_radius: f32,

    /// Radius of a small asteroid
    pub small_asteroid_radius: f32,

    /// Clear radius around the player spawn point where asteroids may not spawn
    pub spawn_safe_radius: f32,

    /// Largest frame delta fed to the simulation (seconds)
    pub max_frame_delta: f32,

    /// Fixed time step used by the headless runner (seconds)
    pub physics_timestep: f32,
}

/// Player ship configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShipConfig {
    /// Thrust acceleration in units per second squared
    pub acceleration: f32,

    /// Ship max speed
    pub max_speed: f32,

    /// Ship rotation speed in degrees per second
    pub rotation_speed: f32,

    /// Thrust factor applied when reversing
    pub reverse_thrust: f32,

    /// Hull width at the base of the triangle
    pub hull_width: f32,

    /// Hull length from base to nose
    pub hull_length: f32,

    /// Length of the gun sound; fire requests are ignored while it plays
    pub gun_sound_duration: f32,
}

/// Projectile configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    /// Muzzle speed, added to the ship's velocity
    pub speed: f32,

    /// Projectile radius
    pub radius: f32,

    /// Seconds before an unspent projectile expires
    pub lifetime: f32,
}

/// Resource file locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Title screen music
    pub title_music: String,

    /// In-game music
    pub game_music: String,

    /// Game over music
    pub end_music: String,

    /// Ship gun sound effect
    pub ship_gun_sfx: String,

    /// UI font
    pub font: String,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            starting_asteroids: 4,
            asteroid_speed: 40.0,
            large_asteroid_radius: 40.0,
            medium_asteroid_radius: 20.0,
            small_asteroid_radius: 10.0,
            spawn_safe_radius: 120.0,
            max_frame_delta: 0.25,
            physics_timestep: 1.0 / 60.0,
        }
    }
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            acceleration: 200.0,
            max_speed: 300.0,
            rotation_speed: 180.0,
            reverse_thrust: 0.5,
            hull_width: 15.0,
            hull_length: 20.0,
            gun_sound_duration: 0.25,
        }
    }
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        Self {
            speed: 100.0,
            radius: 1.0,
            lifetime: 5.0,
        }
    }
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            title_music: "res/title.ogg".to_string(),
            game_music: "res/orchestral.ogg".to_string(),
            end_music: "res/end.ogg".to_string(),
            ship_gun_sfx: "res/ball.wav".to_string(),
            font: "res/sansation.ttf".to_string(),
        }
    }
}

impl FieldConfig {
    /// Field size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Field bounds from the origin
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::new(Vec2::zeros(), self.size())
    }
}

impl GameplayConfig {
    /// Radius for an asteroid size class
    pub fn asteroid_radius(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Large => self.large_asteroid_radius,
            AsteroidSize::Medium => self.medium_asteroid_radius,
            AsteroidSize::Small => self.small_asteroid_radius,
        }
    }
}

impl GameConfig {
    /// Load configuration from `path`, or return defaults if it is absent or unreadable
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load_from_file(path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to load configuration from {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }
}
