use thiserror::Error;

/// Top-level error type for the raycast2d crate.
#[derive(Debug, Error)]
pub enum RaycastError {
    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    /// Raised (as a panic) by operations that are declared but have no
    /// implementation. Never returned as a recoverable error.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Errors related to tolerance configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ToleranceError {
    #[error("epsilon = {0} must be finite and non-negative")]
    InvalidEpsilon(f64),

    #[error("max distance = {0} must be finite and positive")]
    InvalidMaxDistance(f64),
}

/// Convenience type alias for results using [`RaycastError`].
pub type Result<T> = std::result::Result<T, RaycastError>;
