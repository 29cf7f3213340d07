//! Error types for grid construction and startup configuration.

use thiserror::Error;

/// Smallest extent allowed on either axis. Below this a neighbor can wrap
/// onto the same physical cell twice.
pub const MIN_EXTENT: usize = 3;

/// Largest number of cells a grid may hold (10K x 10K)
pub const MAX_CELLS: usize = 100_000_000;

/// Errors raised when building a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid {width}x{height} is too small: both axes must be at least {}", MIN_EXTENT)]
    TooSmall { width: usize, height: usize },

    #[error("grid {width}x{height} is too large: at most {} cells are allowed", MAX_CELLS)]
    TooLarge { width: usize, height: usize },
}

/// Errors raised while reading startup configuration. All of them are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric variable could not be parsed.
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },

    #[error("unknown algorithm {0:?} (expected \"serial\" or \"parallel\")")]
    UnknownAlgorithm(String),

    #[error(transparent)]
    Grid(#[from] GridError),
}
