//! Primitive collision shapes and intersection algorithms
//!
//! Provides 2D primitives (circles, triangles) with the overlap tests the
//! narrow phase needs.

use crate::foundation::math::{Aabb2, Vec2};

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingCircle {
    /// The center position of the circle in play-field space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl BoundingCircle {
    /// Creates a new bounding circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned box enclosing the circle
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_center_extents(self.center, Vec2::new(self.radius, self.radius))
    }

    /// Check if this circle overlaps another
    ///
    /// Strict comparison: circles that merely touch do not overlap, and two
    /// zero-radius circles never do.
    pub fn intersects(&self, other: &BoundingCircle) -> bool {
        let distance_squared = (self.center - other.center).magnitude_squared();
        let radius_sum = self.radius + other.radius;
        distance_squared < radius_sum * radius_sum
    }

    /// Check if a point lies strictly inside the circle
    pub fn contains_point(&self, point: Vec2) -> bool {
        (point - self.center).magnitude_squared() < self.radius * self.radius
    }
}

/// A triangle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Triangle vertices in play-field space
    pub v0: Vec2,
    /// Second vertex
    pub v1: Vec2,
    /// Third vertex
    pub v2: Vec2,
}

impl Triangle {
    /// Creates a new triangle
    pub fn new(v0: Vec2, v1: Vec2, v2: Vec2) -> Self {
        Self { v0, v1, v2 }
    }

    /// The three vertices in order
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.v0, self.v1, self.v2]
    }

    /// The three edges as (start, end) pairs
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)]
    }

    /// Calculates the centroid (center point) of the triangle
    pub fn centroid(&self) -> Vec2 {
        (self.v0 + self.v1 + self.v2) / 3.0
    }

    /// Axis-aligned box enclosing the triangle
    pub fn bounds(&self) -> Aabb2 {
        Aabb2::from_points(&self.vertices())
    }

    /// Twice the signed area; zero for a degenerate (collinear) triangle
    pub fn signed_area_x2(&self) -> f32 {
        cross(self.v1 - self.v0, self.v2 - self.v0)
    }

    /// Point-in-triangle test (edges inclusive), independent of winding
    pub fn contains_point(&self, point: Vec2) -> bool {
        let d0 = cross(self.v1 - self.v0, point - self.v0);
        let d1 = cross(self.v2 - self.v1, point - self.v1);
        let d2 = cross(self.v0 - self.v2, point - self.v2);

        let has_negative = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
        let has_positive = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
        !(has_negative && has_positive)
    }

    /// Circle-triangle overlap
    ///
    /// True when a vertex is inside the circle, the circle center is inside
    /// the triangle, or an edge passes closer to the center than the radius.
    pub fn intersects_circle(&self, circle: &BoundingCircle) -> bool {
        if self.vertices().iter().any(|v| circle.contains_point(*v)) {
            return true;
        }
        if self.contains_point(circle.center) {
            return true;
        }
        let radius_squared = circle.radius * circle.radius;
        self.edges()
            .iter()
            .any(|(a, b)| distance_squared_to_segment(circle.center, *a, *b) < radius_squared)
    }

    /// Triangle-triangle overlap via vertex containment and edge crossings
    pub fn intersects_triangle(&self, other: &Triangle) -> bool {
        if self.vertices().iter().any(|v| other.contains_point(*v))
            || other.vertices().iter().any(|v| self.contains_point(*v))
        {
            return true;
        }
        self.edges().iter().any(|(a, b)| {
            other.edges().iter().any(|(c, d)| segments_cross(*a, *b, *c, *d))
        })
    }
}

/// 2D cross product (z component of the 3D cross product)
fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Squared distance from `point` to the segment `a`-`b`
fn distance_squared_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let length_squared = ab.magnitude_squared();
    if length_squared == 0.0 {
        return (point - a).magnitude_squared();
    }
    let t = ((point - a).dot(&ab) / length_squared).clamp(0.0, 1.0);
    (point - (a + ab * t)).magnitude_squared()
}

/// Proper crossing of two segments
fn segments_cross(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> bool {
    let d1 = cross(b - a, c - a);
    let d2 = cross(b - a, d - a);
    let d3 = cross(d - c, a - c);
    let d4 = cross(d - c, b - c);
    ((d1 > 0.0 && d2 < 0.0) || (d1 < 0.0 && d2 > 0.0))
        && ((d3 > 0.0 && d4 < 0.0) || (d3 < 0.0 && d4 > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship_hull() -> Triangle {
        Triangle::new(Vec2::new(0.0, -10.0), Vec2::new(-7.5, 10.0), Vec2::new(7.5, 10.0))
    }

    #[test]
    fn test_circle_overlap() {
        let a = BoundingCircle::new(Vec2::zeros(), 5.0);
        let b = BoundingCircle::new(Vec2::new(8.0, 0.0), 5.0);
        let c = BoundingCircle::new(Vec2::new(10.0, 0.0), 5.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c), "touching circles do not overlap");
    }

    #[test]
    fn test_zero_radius_circles_never_overlap() {
        let a = BoundingCircle::new(Vec2::new(3.0, 3.0), 0.0);
        assert!(!a.intersects(&a));
    }

    #[test]
    fn test_point_in_triangle_either_winding() {
        let t = ship_hull();
        let flipped = Triangle::new(t.v0, t.v2, t.v1);
        assert!(t.contains_point(Vec2::zeros()));
        assert!(flipped.contains_point(Vec2::zeros()));
        assert!(!t.contains_point(Vec2::new(7.0, -8.0)));
    }

    #[test]
    fn test_circle_touching_edge_only() {
        let t = ship_hull();
        // Circle beside the right edge: no vertex inside, center outside, edge within radius
        let circle = BoundingCircle::new(Vec2::new(8.0, 0.0), 4.5);
        assert!(t.intersects_circle(&circle));

        let far = BoundingCircle::new(Vec2::new(30.0, 0.0), 4.5);
        assert!(!t.intersects_circle(&far));
    }

    #[test]
    fn test_circle_containing_triangle() {
        let circle = BoundingCircle::new(Vec2::zeros(), 40.0);
        assert!(ship_hull().intersects_circle(&circle));
    }

    #[test]
    fn test_triangles_crossing_without_contained_vertices() {
        let a = Triangle::new(Vec2::new(-10.0, 0.0), Vec2::new(10.0, -1.0), Vec2::new(10.0, 1.0));
        let b = Triangle::new(Vec2::new(0.0, -10.0), Vec2::new(-1.0, 10.0), Vec2::new(1.0, 10.0));
        assert!(a.intersects_triangle(&b));
    }
}
