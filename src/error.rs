//! Error types for sat2d operations.

use thiserror::Error;

/// Errors that can occur while building or operating on geometric values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A regular polygon needs at least three sides.
    #[error("invalid side count {sides}: a regular polygon needs at least 3 sides")]
    InvalidSideCount {
        /// The rejected side count.
        sides: usize,
    },

    /// A regular polygon radius must be finite and strictly positive.
    #[error("invalid radius: must be finite and greater than zero")]
    InvalidRadius,

    /// A polygon needs at least three vertices.
    #[error("too few vertices: got {count}, need at least 3")]
    TooFewVertices {
        /// Number of vertices supplied.
        count: usize,
    },

    /// An edge was requested between two identical points.
    #[error("degenerate edge: both endpoints are the same point")]
    DegenerateEdge,

    /// The direction of a zero-length vector is undefined.
    #[error("zero magnitude: cannot take the direction of a zero vector")]
    ZeroMagnitude,
}
