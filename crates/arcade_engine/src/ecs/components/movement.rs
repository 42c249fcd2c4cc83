//! Movement component for entities that drift across the play-field
//!
//! Integrates velocity each tick and wraps the result onto the torus.

use crate::foundation::math::{utils, Vec2};

/// Component for entities that can move
#[derive(Debug, Clone, PartialEq)]
pub struct MovementComponent {
    /// Linear velocity in units per second
    pub velocity: Vec2,

    /// Maximum speed limit (0 = no limit)
    pub max_speed: f32,
}

impl MovementComponent {
    /// Create a stationary movement component
    pub fn new() -> Self {
        Self::with_velocity(Vec2::zeros())
    }

    /// Create a movement component with initial velocity
    pub fn with_velocity(velocity: Vec2) -> Self {
        Self {
            velocity,
            max_speed: 0.0,
        }
    }

    /// Set maximum speed
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed.max(0.0);
    }

    /// Add to velocity, respecting the speed limit
    pub fn add_velocity(&mut self, delta_velocity: Vec2) {
        self.velocity += delta_velocity;
        if self.max_speed > 0.0 {
            self.velocity = utils::clamp_length(self.velocity, self.max_speed);
        }
    }

    /// Integrate `position` over `dt` and wrap it into a field of `field_size`
    pub fn integrate(&self, position: Vec2, dt: f32, field_size: Vec2) -> Vec2 {
        utils::wrap_position(position + self.velocity * dt, field_size)
    }
}

impl Default for MovementComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_integrate_wraps() {
        let movement = MovementComponent::with_velocity(Vec2::new(100.0, -50.0));
        let next = movement.integrate(Vec2::new(790.0, 10.0), 0.5, Vec2::new(800.0, 600.0));
        assert_relative_eq!(next, Vec2::new(40.0, 585.0), epsilon = 1e-4);
    }

    #[test]
    fn test_speed_limit() {
        let mut movement = MovementComponent::new();
        movement.set_max_speed(5.0);
        movement.add_velocity(Vec2::new(30.0, 40.0));
        assert_relative_eq!(movement.velocity.magnitude(), 5.0, epsilon = 1e-5);
    }
}
