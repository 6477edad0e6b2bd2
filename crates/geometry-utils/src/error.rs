//! Error types for geometric conversions and estimators.
//!
//! Degenerate planes are not errors; see `Plane::UNDEFINED`.

use thiserror::Error;

/// Errors surfaced by conversions and estimators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Correspondence sequences have different lengths.
    #[error("number of points do not match: {from} from-points vs {to} to-points")]
    CountMismatch {
        /// Number of "from" points.
        from: usize,
        /// Number of "to" points.
        to: usize,
    },

    /// Homogeneous point at infinity (or empty) has no Euclidean counterpart.
    #[error("cannot convert ideal point to non-homogeneous coordinates (scale {w:e})")]
    ConversionUndefined {
        /// The offending scale coordinate.
        w: f64,
    },

    /// Correspondences have zero spread, so conditioning is impossible.
    #[error("correspondences have zero spread; cannot condition point set")]
    DegenerateCorrespondences,

    /// A decomposition or inverse failed inside an estimator.
    #[error("singular matrix: {0}")]
    SingularMatrix(&'static str),
}

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;
