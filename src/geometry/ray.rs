use crate::math::intersect_2d::{
    ray_circle_intersect, ray_segment_intersect, ray_triangle_intersect, RayHit,
};
use crate::math::{Point2, Tolerance, Vector2};

use super::Triangle2;

/// A 2D ray defined by a start point and a direction vector.
///
/// The ray is **bounded**: it covers the segment from `start` to
/// `start + dir` and nothing beyond. The length of `dir` is therefore the
/// reach of the ray. For an effectively infinite ray, scale `dir` past any
/// distance of interest.
///
/// `dir` is neither normalized nor checked; a zero direction gives
/// meaningless results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray2 {
    /// Start point of the ray.
    pub start: Point2,
    /// Direction and reach of the ray.
    pub dir: Vector2,
}

impl Ray2 {
    /// Creates a new ray from a start point and direction.
    #[must_use]
    pub fn new(start: Point2, dir: Vector2) -> Self {
        Self { start, dir }
    }

    /// Creates a new ray from raw start `(px, py)` and direction `(vx, vy)`.
    #[must_use]
    pub fn from_components(px: f64, py: f64, vx: f64, vy: f64) -> Self {
        Self::new(Point2::new(px, py), Vector2::new(vx, vy))
    }

    /// Returns the far end of the ray, `start + dir`.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.start + self.dir
    }

    /// Intersects the ray with segment `p1 -> p2` using the default tolerance.
    ///
    /// See [`ray_segment_intersect`].
    #[must_use]
    pub fn intersect_segment(&self, p1: &Point2, p2: &Point2) -> Option<Point2> {
        ray_segment_intersect(self, p1, p2, &Tolerance::default())
    }

    /// Intersects the ray with a triangle's boundary using the default tolerance.
    ///
    /// See [`ray_triangle_intersect`].
    #[must_use]
    pub fn intersect_triangle(&self, triangle: &Triangle2) -> Option<RayHit> {
        ray_triangle_intersect(
            self,
            &triangle.p1,
            &triangle.p2,
            &triangle.p3,
            &Tolerance::default(),
        )
    }

    /// Intersects the ray with a circle.
    ///
    /// # Panics
    ///
    /// Always panics; see [`ray_circle_intersect`].
    #[must_use]
    pub fn intersect_circle(&self, center: &Point2, radius: f64) -> Option<Point2> {
        ray_circle_intersect(self, center, radius)
    }
}
