//! Error types for hexgrid-topology.

use thiserror::Error;

/// Result type for hexgrid-topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a precondition on the grid API is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An argument violates a precondition (zero ring radius, non-adjacent
    /// edge endpoints, a coordinate off the `x + y + z == 0` plane, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is geometrically degenerate, e.g. fewer than two points
    /// when estimating a hex size from their spacing.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub(crate) fn degenerate(msg: impl Into<String>) -> Self {
        Self::DegenerateInput(msg.into())
    }
}
