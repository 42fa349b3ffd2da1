//! Error types for grid construction and simulation.

use thiserror::Error;

/// Failures surfaced by the simulation core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Seed input does not describe a rectangular binary grid of the declared size.
    #[error("Malformed seed: {0}")]
    MalformedSeed(String),

    /// A coordinate outside the grid was accessed.
    #[error("Cell ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    /// A negative number of generations was requested.
    #[error("Invalid generation count: {0} (must be >= 0)")]
    InvalidGenerationCount(i64),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, GridError>;

impl GridError {
    /// Creates a `MalformedSeed` error.
    #[must_use]
    pub fn malformed<S: Into<String>>(msg: S) -> Self {
        Self::MalformedSeed(msg.into())
    }
}
