use crate::math::Point2;

/// A triangle given by three ordered vertices.
///
/// Vertex order fixes the edge order used for intersection tests but not the
/// orientation of edge normals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle2 {
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl Triangle2 {
    /// Creates a new triangle.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the edges as `(start, end, opposite_vertex)` in the order
    /// `p1-p2`, `p2-p3`, `p3-p1`.
    #[must_use]
    pub fn edges(&self) -> [(Point2, Point2, Point2); 3] {
        [
            (self.p1, self.p2, self.p3),
            (self.p2, self.p3, self.p1),
            (self.p3, self.p1, self.p2),
        ]
    }
}
