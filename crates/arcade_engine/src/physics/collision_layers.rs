//! Collision layer system for filtering collision detection
//!
//! Every collider sits on one or more layers and carries a mask of the layers
//! it reacts to. A pair is tested only when each side's layer appears in the
//! other's mask.

use bitflags::bitflags;

bitflags! {
    /// Collision layer definitions
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player character layer
        const PLAYER = 1 << 0;

        /// Hostile objects (asteroids)
        const ENEMY = 1 << 1;

        /// Projectiles (bullets, missiles, etc.)
        const PROJECTILE = 1 << 2;

        /// Pickups and collectibles
        const PICKUP = 1 << 3;
    }
}

impl CollisionLayers {
    /// Check if two entities should collide based on their layers and masks
    ///
    /// # Example
    /// ```
    /// use arcade_engine::physics::CollisionLayers;
    ///
    /// let ship = (CollisionLayers::PLAYER, CollisionLayers::ENEMY);
    /// let rock = (CollisionLayers::ENEMY, CollisionLayers::PLAYER | CollisionLayers::PROJECTILE);
    ///
    /// assert!(CollisionLayers::should_collide(ship.0, ship.1, rock.0, rock.1));
    /// assert!(!CollisionLayers::should_collide(rock.0, rock.1, rock.0, rock.1));
    /// ```
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        // A's layer must be in B's mask AND B's layer must be in A's mask
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_collide_mutual() {
        assert!(CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::PLAYER,
        ));
    }

    #[test]
    fn test_should_not_collide_one_way() {
        // Player wants to collide with enemy, but enemy doesn't want to collide with player
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PLAYER, CollisionLayers::ENEMY,
            CollisionLayers::ENEMY, CollisionLayers::PROJECTILE,
        ));
    }

    #[test]
    fn test_projectiles_ignore_each_other() {
        assert!(!CollisionLayers::should_collide(
            CollisionLayers::PROJECTILE, CollisionLayers::ENEMY,
            CollisionLayers::PROJECTILE, CollisionLayers::ENEMY,
        ));
    }
}
