use super::{Point2, Vector2};

/// Returns the normal of edge `p1 -> p2` that points away from `other`.
///
/// The normal is the edge vector rotated by a quarter turn and is not
/// normalized: its length equals the edge length. When `other` lies on the
/// edge's supporting line the clockwise perpendicular `(e.y, -e.x)` is
/// returned unchanged.
///
/// For a triangle edge, passing the remaining vertex as `other` yields the
/// outward normal whatever the triangle's winding.
#[must_use]
pub fn edge_normal(p1: &Point2, p2: &Point2, other: &Point2) -> Vector2 {
    let edge = p2 - p1;
    let to_other = other - p1;
    let n = Vector2::new(edge.y, -edge.x);
    if n.dot(&to_other) > 0.0 {
        -n
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn points_away_from_reference_above() {
        let n = edge_normal(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
        );
        assert_relative_eq!(n.normalize(), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn points_away_from_reference_below() {
        let n = edge_normal(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.3, -2.0),
        );
        assert_relative_eq!(n.normalize(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn flips_when_dot_is_positive() {
        // AB = (-1,-3), AC = (-2,-1), n(AB) = (-3,1), dot = 5 > 0, so negate.
        let n = edge_normal(
            &Point2::new(3.0, 4.0),
            &Point2::new(2.0, 1.0),
            &Point2::new(1.0, 3.0),
        );
        assert_relative_eq!(n, Vector2::new(3.0, -1.0));
    }

    #[test]
    fn magnitude_is_edge_length() {
        let n = edge_normal(
            &Point2::new(1.0, 1.0),
            &Point2::new(4.0, 5.0),
            &Point2::new(0.0, 10.0),
        );
        assert_relative_eq!(n.norm(), 5.0);
    }

    #[test]
    fn winding_does_not_change_outward_direction() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(4.0, 0.0);
        let c = Point2::new(2.0, 3.0);
        // Edge a-b traversed both ways with c as the interior reference.
        let ccw = edge_normal(&a, &b, &c);
        let cw = edge_normal(&b, &a, &c);
        assert_relative_eq!(ccw, cw);
        assert!(ccw.y < 0.0);
    }

    #[test]
    fn collinear_reference_keeps_clockwise_perpendicular() {
        let n = edge_normal(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 0.0),
            &Point2::new(5.0, 0.0),
        );
        assert_relative_eq!(n, Vector2::new(0.0, -2.0));
    }
}
