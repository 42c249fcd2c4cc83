//! Math utilities and types
//!
//! Provides the 2D math types used by the simulation together with the
//! toroidal wrap helpers that keep positions inside the play-field.
//!
//! Screen conventions: `+x` points right, `+y` points down, and rotations are
//! measured in degrees clockwise from "up" (`0°` faces `-y`).

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 2D point type
pub type Point2 = nalgebra::Point2<f32>;

/// Axis-aligned bounding box in play-field space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner (left, top)
    pub min: Vec2,
    /// Maximum corner (right, bottom)
    pub max: Vec2,
}

impl Aabb2 {
    /// Create a new box from min and max corners
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Create a box centered at a point with given half-extents
    pub fn from_center_extents(center: Vec2, extents: Vec2) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Smallest box enclosing every point, or a zero-size box at the origin for no points
    pub fn from_points(points: &[Vec2]) -> Self {
        let Some(first) = points.first() else {
            return Self::new(Vec2::zeros(), Vec2::zeros());
        };
        points.iter().skip(1).fold(Self::new(*first, *first), |acc, p| Self {
            min: Vec2::new(acc.min.x.min(p.x), acc.min.y.min(p.y)),
            max: Vec2::new(acc.max.x.max(p.x), acc.max.y.max(p.y)),
        })
    }

    /// Get the center of the box
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Get the extents (half-size) of the box
    pub fn extents(&self) -> Vec2 {
        (self.max - self.min) * 0.5
    }

    /// Full width
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Full height
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// A box with no area (zero width or zero height)
    pub fn is_degenerate(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Check if this box contains a point (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y
    }

    /// Check if `other` lies entirely within this box (edges inclusive)
    pub fn contains(&self, other: &Aabb2) -> bool {
        other.min.x >= self.min.x && other.max.x <= self.max.x &&
        other.min.y >= self.min.y && other.max.y <= self.max.y
    }

    /// Check if this box intersects another box (touching edges count)
    pub fn intersects(&self, other: &Aabb2) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y
    }

    /// Split into four equal quadrants: top-left, top-right, bottom-left, bottom-right
    pub fn quadrants(&self) -> [Aabb2; 4] {
        let mid = self.center();
        [
            Aabb2::new(self.min, mid),
            Aabb2::new(Vec2::new(mid.x, self.min.y), Vec2::new(self.max.x, mid.y)),
            Aabb2::new(Vec2::new(self.min.x, mid.y), Vec2::new(mid.x, self.max.y)),
            Aabb2::new(mid, self.max),
        ]
    }
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;

    /// Degrees in a full turn
    pub const FULL_TURN_DEG: f32 = 360.0;
}

/// Math utility functions
pub mod utils {
    use super::{constants, Vec2};

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Normalize an angle in degrees into `[0, 360)`
    pub fn clamp_degrees(degrees: f32) -> f32 {
        let wrapped = degrees.rem_euclid(constants::FULL_TURN_DEG);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if wrapped >= constants::FULL_TURN_DEG { 0.0 } else { wrapped }
    }

    /// Unit vector for a rotation in degrees (`0°` is up, clockwise positive)
    pub fn heading(degrees: f32) -> Vec2 {
        let radians = deg_to_rad(degrees);
        Vec2::new(radians.sin(), -radians.cos())
    }

    /// Rotate a vector clockwise (screen space) by `degrees`
    pub fn rotate(v: Vec2, degrees: f32) -> Vec2 {
        let (sin, cos) = deg_to_rad(degrees).sin_cos();
        Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
    }

    /// Wrap a single coordinate into `[0, extent)`
    pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
        if extent <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        let wrapped = value.rem_euclid(extent);
        if wrapped >= extent { 0.0 } else { wrapped }
    }

    /// Toroidal wrap of a position into `[0, size.x) x [0, size.y)`
    ///
    /// Works for any displacement, including ones spanning the field several times.
    pub fn wrap_position(position: Vec2, size: Vec2) -> Vec2 {
        Vec2::new(
            wrap_coordinate(position.x, size.x),
            wrap_coordinate(position.y, size.y),
        )
    }

    /// Scale `velocity` down so its length does not exceed `max_speed`
    pub fn clamp_length(velocity: Vec2, max_speed: f32) -> Vec2 {
        let speed = velocity.magnitude();
        if speed > max_speed && speed > 0.0 {
            velocity * (max_speed / speed)
        } else {
            velocity
        }
    }
}
