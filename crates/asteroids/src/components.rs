//! Game-specific components
//!
//! Per-variant state carried by a [`GameObject`](crate::game_object::GameObject).

use arcade_engine::ecs::{Entity, Lifetime};
use arcade_engine::foundation::math::Vec2;

use crate::config::ShipConfig;

/// Tag used by the lifecycle rules to tell entity variants apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectType {
    /// The player's ship
    Player,

    /// An asteroid of any size
    Asteroid,

    /// A projectile fired by the ship
    Projectile,
}

/// Asteroid size categories, ordered by strictly decreasing radius
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AsteroidSize {
    /// Large asteroid (splits into medium)
    Large,

    /// Medium asteroid (splits into small)
    Medium,

    /// Small asteroid (destroyed completely)
    Small,
}

impl AsteroidSize {
    /// Get the next smaller size when split
    pub fn split_into(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// Player ship component
#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    /// Hull vertices relative to the ship's origin at rotation 0: nose, back-left, back-right
    pub hull: [Vec2; 3],

    /// Thrust acceleration in units per second squared
    pub acceleration: f32,

    /// Thrust requested this frame (1 forward, negative reverse, 0 idle)
    pub thrust: f32,

    /// Rotation requested this frame in degrees per second (positive = clockwise)
    pub angular_velocity: f32,

    /// Seconds left on the gun sound; fire requests are ignored until it reaches zero
    pub gun_sound_remaining: f32,
}

impl Ship {
    /// Create a ship whose hull matches the configured dimensions
    pub fn new(config: &ShipConfig) -> Self {
        let half_width = config.hull_width * 0.5;
        let half_length = config.hull_length * 0.5;
        Self {
            hull: [
                Vec2::new(0.0, -half_length),
                Vec2::new(-half_width, half_length),
                Vec2::new(half_width, half_length),
            ],
            acceleration: config.acceleration,
            thrust: 0.0,
            angular_velocity: 0.0,
            gun_sound_remaining: 0.0,
        }
    }

    /// Radius of the circle around the origin that encloses the hull
    pub fn hull_radius(&self) -> f32 {
        self.hull.iter().map(|v| v.magnitude()).fold(0.0, f32::max)
    }

    /// Whether the gun sound from the last shot is still playing
    pub fn is_gun_sound_playing(&self) -> bool {
        self.gun_sound_remaining > 0.0
    }
}

/// Asteroid component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asteroid {
    /// Asteroid size category
    pub size: AsteroidSize,
}

/// Projectile component
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    /// Remaining time to live
    pub lifetime: Lifetime,

    /// Who fired this projectile
    pub owner: Entity,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_split_chain() {
        assert_eq!(AsteroidSize::Large.split_into(), Some(AsteroidSize::Medium));
        assert_eq!(AsteroidSize::Medium.split_into(), Some(AsteroidSize::Small));
        assert_eq!(AsteroidSize::Small.split_into(), None);
    }

    #[test]
    fn test_hull_radius() {
        let ship = Ship::new(&ShipConfig::default());
        // Back corners at (+-7.5, 10)
        assert_relative_eq!(ship.hull_radius(), 12.5, epsilon = 1e-5);
    }
}
