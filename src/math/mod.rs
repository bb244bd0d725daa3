pub mod intersect_2d;
pub mod normal_2d;
mod tolerance;

pub use tolerance::Tolerance;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Default tolerance for parallel and bounding-box containment tests.
pub const EPSILON: f64 = 1e-6;

/// Default sentinel distance for nearest-hit selection.
///
/// Hits at or beyond this distance from the ray start are never reported,
/// so callers working at larger scales must raise it via [`Tolerance`].
pub const MAX_HIT_DISTANCE: f64 = 10_000.0;
