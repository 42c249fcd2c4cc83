//! Lifetime Component
//!
//! Counts down an entity's remaining time to live.

/// Time-to-live countdown for short-lived entities such as projectiles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lifetime {
    /// Seconds left before the entity expires
    remaining: f32,
}

impl Lifetime {
    /// Create a new lifetime of `duration` seconds
    pub fn new(duration: f32) -> Self {
        Self {
            remaining: duration.max(0.0),
        }
    }

    /// Advance the countdown by `dt` seconds, returning true once expired
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining = (self.remaining - dt.max(0.0)).max(0.0);
        self.is_expired()
    }

    /// Check if this entity's lifetime has run out
    pub fn is_expired(&self) -> bool {
        self.remaining <= 0.0
    }

    /// Get remaining lifetime in seconds
    pub fn remaining(&self) -> f32 {
        self.remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_not_expired() {
        let mut lifetime = Lifetime::new(5.0);
        assert!(!lifetime.tick(2.0));
        assert_eq!(lifetime.remaining(), 3.0);
    }

    #[test]
    fn test_lifetime_expired() {
        let mut lifetime = Lifetime::new(5.0);
        lifetime.tick(4.0);
        assert!(lifetime.tick(1.5));
        assert_eq!(lifetime.remaining(), 0.0);
    }

    #[test]
    fn test_zero_lifetime_is_expired() {
        assert!(Lifetime::new(0.0).is_expired());
    }
}
