use crate::error::{Result, ToleranceError};

use super::{EPSILON, MAX_HIT_DISTANCE};

/// Numeric tolerances used by the intersection routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
    max_distance: f64,
}

impl Tolerance {
    /// Creates a new tolerance set.
    ///
    /// # Errors
    ///
    /// Returns `ToleranceError::InvalidEpsilon` if `epsilon` is negative or
    /// not finite, and `ToleranceError::InvalidMaxDistance` if `max_distance`
    /// is not a finite positive number.
    pub fn new(epsilon: f64, max_distance: f64) -> Result<Self> {
        Ok(Self {
            epsilon: check_epsilon(epsilon)?,
            max_distance: check_max_distance(max_distance)?,
        })
    }

    /// Returns a copy with a different epsilon.
    ///
    /// # Errors
    ///
    /// Returns `ToleranceError::InvalidEpsilon` if `epsilon` is negative or not finite.
    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Ok(Self {
            epsilon: check_epsilon(epsilon)?,
            ..self
        })
    }

    /// Returns a copy with a different nearest-hit sentinel distance.
    ///
    /// # Errors
    ///
    /// Returns `ToleranceError::InvalidMaxDistance` if `max_distance` is not a
    /// finite positive number.
    pub fn with_max_distance(self, max_distance: f64) -> Result<Self> {
        Ok(Self {
            max_distance: check_max_distance(max_distance)?,
            ..self
        })
    }

    /// Tolerance for the parallel test and bounding-box containment.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Initial best distance for nearest-hit selection.
    #[must_use]
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            max_distance: MAX_HIT_DISTANCE,
        }
    }
}

fn check_epsilon(epsilon: f64) -> Result<f64> {
    if epsilon.is_finite() && epsilon >= 0.0 {
        Ok(epsilon)
    } else {
        Err(ToleranceError::InvalidEpsilon(epsilon).into())
    }
}

fn check_max_distance(max_distance: f64) -> Result<f64> {
    if max_distance.is_finite() && max_distance > 0.0 {
        Ok(max_distance)
    } else {
        Err(ToleranceError::InvalidMaxDistance(max_distance).into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::RaycastError;

    #[test]
    fn default_uses_crate_constants() {
        let tol = Tolerance::default();
        assert_relative_eq!(tol.epsilon(), EPSILON);
        assert_relative_eq!(tol.max_distance(), MAX_HIT_DISTANCE);
    }

    #[test]
    fn new_accepts_zero_epsilon() {
        let tol = Tolerance::new(0.0, 1.0).unwrap();
        assert_relative_eq!(tol.epsilon(), 0.0);
        assert_relative_eq!(tol.max_distance(), 1.0);
    }

    #[test]
    fn new_rejects_negative_epsilon() {
        let err = Tolerance::new(-1e-6, 10.0).unwrap_err();
        assert!(matches!(
            err,
            RaycastError::Tolerance(ToleranceError::InvalidEpsilon(_))
        ));
    }

    #[test]
    fn new_rejects_nan_epsilon() {
        assert!(Tolerance::new(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn new_rejects_non_positive_max_distance() {
        for bad in [0.0, -5.0, f64::INFINITY, f64::NAN] {
            let err = Tolerance::new(EPSILON, bad).unwrap_err();
            assert!(
                matches!(
                    err,
                    RaycastError::Tolerance(ToleranceError::InvalidMaxDistance(_))
                ),
                "max_distance={bad} err={err:?}"
            );
        }
    }

    #[test]
    fn setters_keep_the_other_field() {
        let tol = Tolerance::default().with_max_distance(1e6).unwrap();
        assert_relative_eq!(tol.epsilon(), EPSILON);
        assert_relative_eq!(tol.max_distance(), 1e6);

        let tol = tol.with_epsilon(1e-9).unwrap();
        assert_relative_eq!(tol.epsilon(), 1e-9);
        assert_relative_eq!(tol.max_distance(), 1e6);
    }

    #[test]
    fn error_message_names_the_value() {
        let err = Tolerance::default().with_epsilon(-2.0).unwrap_err();
        assert_eq!(err.to_string(), "epsilon = -2 must be finite and non-negative");
    }
}
