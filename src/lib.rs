// Error types shared by all layers
pub mod error;

// Domain layer - grid, rule, stepping, projection
pub mod domain;

// Application layer - configuration and the simulation driver
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Dimensions, Grid, Pattern, PointBuffer, presets, project};
pub use application::{Config, Simulation};
pub use error::{ConfigError, GridError};
