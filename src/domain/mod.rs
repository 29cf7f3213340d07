mod cell;
mod grid;
mod patterns;
mod algorithm;
mod projection;

pub use cell::Cell;
pub use grid::{Dimensions, Grid};
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
pub use projection::{PointBuffer, project};
