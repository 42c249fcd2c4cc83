//! High-level collision shape abstraction
//!
//! Shapes are built in play-field space each tick from an entity's current
//! transform and are only kept for the duration of that tick's tests.

use crate::foundation::math::{Aabb2, Vec2};
use super::primitives::{BoundingCircle, Triangle};

/// Collision shape in play-field space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionShape {
    /// Circle approximation (asteroids, projectiles)
    Circle(BoundingCircle),
    /// Triangular hull (the player's ship)
    Triangle(Triangle),
}

impl CollisionShape {
    /// Creates a circular shape
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle(BoundingCircle::new(center, radius))
    }

    /// Creates a triangular shape from three vertices
    pub fn triangle(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self::Triangle(Triangle::new(v0, v1, v2))
    }

    /// Get center position
    pub fn center(&self) -> Vec2 {
        match self {
            Self::Circle(circle) => circle.center,
            Self::Triangle(triangle) => triangle.centroid(),
        }
    }

    /// Axis-aligned box enclosing the shape
    pub fn bounds(&self) -> Aabb2 {
        match self {
            Self::Circle(circle) => circle.bounds(),
            Self::Triangle(triangle) => triangle.bounds(),
        }
    }

    /// A shape with no area: zero radius or collinear vertices
    ///
    /// Degenerate shapes are still indexed but never report an overlap.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Circle(circle) => circle.radius <= 0.0,
            Self::Triangle(triangle) => triangle.signed_area_x2() == 0.0,
        }
    }

    /// Test if this shape intersects with another shape
    pub fn intersects(&self, other: &CollisionShape) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        match (self, other) {
            (Self::Circle(a), Self::Circle(b)) => a.intersects(b),

            (Self::Circle(circle), Self::Triangle(triangle)) |
            (Self::Triangle(triangle), Self::Circle(circle)) => triangle.intersects_circle(circle),

            (Self::Triangle(a), Self::Triangle(b)) => a.intersects_triangle(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vs_triangle_is_symmetric() {
        let hull = CollisionShape::triangle(Vec2::new(0.0, -10.0), Vec2::new(-7.5, 10.0), Vec2::new(7.5, 10.0));
        let rock = CollisionShape::circle(Vec2::new(0.0, 20.0), 12.0);
        assert!(hull.intersects(&rock));
        assert!(rock.intersects(&hull));
    }

    #[test]
    fn test_degenerate_shapes_never_overlap() {
        let point = CollisionShape::circle(Vec2::new(5.0, 5.0), 0.0);
        let rock = CollisionShape::circle(Vec2::new(5.0, 5.0), 20.0);
        assert!(point.is_degenerate());
        assert!(!point.intersects(&rock));
        assert!(!rock.intersects(&point));

        let line = CollisionShape::triangle(Vec2::zeros(), Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(line.is_degenerate());
        assert!(!line.intersects(&rock));
    }

    #[test]
    fn test_bounds() {
        let rock = CollisionShape::circle(Vec2::new(50.0, 40.0), 10.0);
        assert_eq!(rock.bounds(), Aabb2::new(Vec2::new(40.0, 30.0), Vec2::new(60.0, 50.0)));
    }
}
