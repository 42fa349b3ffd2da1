//! Error types for lifetrace_io.
//!
//! Wraps core grid failures together with file, trace and matrix errors.

use lifetrace_core::GridError;
use thiserror::Error;

/// Main error type for lifetrace_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Seed or grid construction errors from the core
    #[error(transparent)]
    Grid(#[from] GridError),

    /// File system errors
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed trace text
    #[error("Trace error: {0}")]
    Trace(String),

    /// Malformed matrix file or incompatible operands
    #[error("Matrix error: {0}")]
    Matrix(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    Context {
        context: String,
        source: Box<IoError>,
    },
}

/// Result type alias for lifetrace_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Creates a trace error.
    #[must_use]
    pub fn trace<S: Into<String>>(msg: S) -> Self {
        Self::Trace(msg.into())
    }

    /// Creates a matrix error.
    #[must_use]
    pub fn matrix<S: Into<String>>(msg: S) -> Self {
        Self::Matrix(msg.into())
    }

    /// Creates a malformed seed error.
    #[must_use]
    pub fn malformed_seed<S: Into<String>>(msg: S) -> Self {
        Self::Grid(GridError::malformed(msg))
    }

    /// Wraps an error with additional context.
    #[must_use]
    pub fn with_context<S: Into<String>>(self, context: S) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error once context wrappers are peeled off.
    #[must_use]
    pub fn root(&self) -> &IoError {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// True when the root cause is a malformed seed.
    #[must_use]
    pub fn is_malformed_seed(&self) -> bool {
        matches!(self.root(), Self::Grid(GridError::MalformedSeed(_)))
    }
}
