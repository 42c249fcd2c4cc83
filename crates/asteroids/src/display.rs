//! Play-field geometry helpers
//!
//! The [`DisplayManager`] knows the visible area and answers placement
//! questions: where the player spawns, whether an object has left the camera
//! and where a fresh asteroid may safely appear.

use arcade_engine::foundation::math::{utils, Aabb2, Vec2};
use rand::Rng;

use crate::game_object::GameObject;

/// Attempts at a random asteroid position before falling back to a corner
const MAX_PLACEMENT_ATTEMPTS: u32 = 64;

/// View geometry for the toroidal play-field
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayManager {
    view_size: Vec2,
    spawn_safe_radius: f32,
}

impl DisplayManager {
    /// Create a manager for a view of `view_size`
    pub fn new(view_size: Vec2, spawn_safe_radius: f32) -> Self {
        Self {
            view_size,
            spawn_safe_radius,
        }
    }

    /// Size of the visible area
    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    /// Visible area as a box from the origin
    pub fn view_bounds(&self) -> Aabb2 {
        Aabb2::new(Vec2::zeros(), self.view_size)
    }

    /// Where the player ship spawns: the center of the view
    pub fn player_spawn(&self) -> Vec2 {
        self.view_size * 0.5
    }

    /// True when a circle at `position` with `radius` lies completely outside the view
    pub fn off_camera(&self, position: Vec2, radius: f32) -> bool {
        position.x + radius < 0.0
            || position.y + radius < 0.0
            || position.x - radius > self.view_size.x
            || position.y - radius > self.view_size.y
    }

    /// Wrap an object back onto the field if it has left the view
    ///
    /// Returns true when the object was moved.
    pub fn wrap_object(&self, object: &mut GameObject) -> bool {
        let wrapped = utils::wrap_position(object.position(), self.view_size);
        if wrapped == object.position() {
            return false;
        }
        object.move_to(wrapped);
        true
    }

    /// Random position for a new asteroid, clear of the player spawn
    ///
    /// Positions within the safe radius of the spawn point, or overlapping any
    /// live object, are rejected. After too many rejections the top-left corner
    /// inset by `radius` is used.
    pub fn valid_asteroid_position<R: Rng + ?Sized>(&self, rng: &mut R, radius: f32, objects: &[GameObject]) -> Vec2 {
        let spawn = self.player_spawn();
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let candidate = Vec2::new(
                rng.gen_range(0.0..self.view_size.x),
                rng.gen_range(0.0..self.view_size.y),
            );
            if (candidate - spawn).magnitude() < self.spawn_safe_radius + radius {
                continue;
            }
            let overlaps = objects
                .iter()
                .filter(|object| !object.is_destroyed())
                .any(|object| (candidate - object.position()).magnitude() < object.radius() + radius);
            if !overlaps {
                return candidate;
            }
        }

        log::warn!("No clear asteroid position after {MAX_PLACEMENT_ATTEMPTS} attempts; using a corner");
        Vec2::new(radius, radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn display() -> DisplayManager {
        DisplayManager::new(Vec2::new(800.0, 600.0), 120.0)
    }

    #[test]
    fn test_player_spawn_is_center() {
        assert_eq!(display().player_spawn(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_off_camera() {
        let display = display();
        assert!(!display.off_camera(Vec2::new(400.0, 300.0), 10.0));
        assert!(!display.off_camera(Vec2::new(-5.0, 300.0), 10.0));
        assert!(display.off_camera(Vec2::new(-11.0, 300.0), 10.0));
        assert!(display.off_camera(Vec2::new(400.0, 611.0), 10.0));
    }

    #[test]
    fn test_asteroid_positions_clear_of_spawn() {
        let display = display();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = display.valid_asteroid_position(&mut rng, 40.0, &[]);
            assert!((p - display.player_spawn()).magnitude() >= 160.0, "{p:?}");
            assert!(display.view_bounds().contains_point(p));
        }
    }

    #[test]
    fn test_crowded_field_falls_back_to_inset_corner() {
        let display = DisplayManager::new(Vec2::new(800.0, 600.0), 10_000.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(display.valid_asteroid_position(&mut rng, 40.0, &[]), Vec2::new(40.0, 40.0));
    }
}
