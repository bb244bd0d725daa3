pub mod error;
pub mod geometry;
pub mod math;

pub use error::{RaycastError, Result, ToleranceError};
pub use geometry::{Ray2, Triangle2};
pub use math::intersect_2d::RayHit;
pub use math::{Point2, Tolerance, Vector2};
