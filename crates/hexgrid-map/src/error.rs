//! Error types for hexgrid-map.

use thiserror::Error;

/// Result type for hexgrid-map operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or laying out a map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A grid operation rejected its input.
    #[error(transparent)]
    Topology(#[from] hexgrid_topology::Error),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::Topology(hexgrid_topology::Error::InvalidArgument(msg.into()))
    }
}
