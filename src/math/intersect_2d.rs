use tracing::trace;

use super::normal_2d::edge_normal;
use super::{Point2, Tolerance, Vector2};
use crate::error::RaycastError;
use crate::geometry::{Ray2, Triangle2};

/// Result of a ray-triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// The nearest intersection point.
    pub point: Point2,
    /// Normal of the hit edge, pointing away from the triangle's opposite
    /// vertex. Not normalized.
    pub normal: Vector2,
}

/// Intersection of a ray with the line segment `p1 -> p2`.
///
/// The ray is the finite segment `ray.start -> ray.start + ray.dir`, not an
/// infinite half-line: a crossing beyond `ray.end()` is a miss. Callers that
/// need an unbounded ray must scale `dir` past any distance of interest.
///
/// Returns `None` if the lines are parallel (`|denom| <= epsilon`) or if the
/// crossing point lies outside either segment's bounding box grown by
/// `epsilon`. Containment in both boxes is the only acceptance test; the
/// parameter along the target (`ub`) is computed but not used.
#[must_use]
pub fn ray_segment_intersect(
    ray: &Ray2,
    p1: &Point2,
    p2: &Point2,
    tol: &Tolerance,
) -> Option<Point2> {
    let eps = tol.epsilon();
    let r0 = ray.start;
    let r1 = ray.end();

    let denom = (p2.y - p1.y) * (r1.x - r0.x) - (p2.x - p1.x) * (r1.y - r0.y);
    if denom.abs() <= eps {
        trace!(denom, "ray parallel to segment");
        return None;
    }

    let ua = ((p2.x - p1.x) * (r0.y - p1.y) - (p2.y - p1.y) * (r0.x - p1.x)) / denom;
    let ub = ((r1.x - r0.x) * (r0.y - p1.y) - (r1.y - r0.y) * (r0.x - p1.x)) / denom;

    let pt = r0 + (r1 - r0) * ua;

    if !within_box(&pt, p1, p2, eps) {
        trace!(x = pt.x, y = pt.y, ua, ub, "crossing outside of segment");
        return None;
    }
    if !within_box(&pt, &r0, &r1, eps) {
        trace!(x = pt.x, y = pt.y, ua, ub, "crossing outside of ray");
        return None;
    }

    Some(pt)
}

/// Intersection of a ray with the boundary of triangle `(p1, p2, p3)`.
///
/// Edges are tested in the order `p1-p2`, `p2-p3`, `p3-p1` and the hit
/// closest to `ray.start` wins; on an exact distance tie the earlier edge is
/// kept. Hits at or beyond `tol.max_distance()` are ignored. The reported
/// normal belongs to the winning edge and points away from the vertex not on
/// that edge, so it faces outward for either winding.
///
/// The ray is bounded by `ray.dir` as in [`ray_segment_intersect`].
#[must_use]
pub fn ray_triangle_intersect(
    ray: &Ray2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    tol: &Tolerance,
) -> Option<RayHit> {
    let triangle = Triangle2::new(*p1, *p2, *p3);
    let mut best_distance = tol.max_distance();
    let mut best: Option<RayHit> = None;

    for (a, b, opposite) in triangle.edges() {
        let Some(pt) = ray_segment_intersect(ray, &a, &b, tol) else {
            continue;
        };
        let distance = (pt - ray.start).norm();
        if distance < best_distance {
            best_distance = distance;
            best = Some(RayHit {
                point: pt,
                normal: edge_normal(&a, &b, &opposite),
            });
        }
    }

    if let Some(hit) = &best {
        trace!(
            x = hit.point.x,
            y = hit.point.y,
            distance = best_distance,
            "nearest triangle hit"
        );
    }
    best
}

/// Intersection of a ray with a circle.
///
/// # Panics
///
/// Always panics: ray-circle intersection has no implementation, and a
/// silent miss would hide the faulty call site.
#[must_use]
pub fn ray_circle_intersect(_ray: &Ray2, _center: &Point2, _radius: f64) -> Option<Point2> {
    unimplemented!("{}", RaycastError::NotImplemented("ray-circle intersection"))
}

/// Checks whether `pt` lies inside the axis-aligned box spanned by `a` and
/// `b`, grown by `eps` on every side.
fn within_box(pt: &Point2, a: &Point2, b: &Point2, eps: f64) -> bool {
    pt.x >= a.x.min(b.x) - eps
        && pt.x <= a.x.max(b.x) + eps
        && pt.y >= a.y.min(b.y) - eps
        && pt.y <= a.y.max(b.y) + eps
}
