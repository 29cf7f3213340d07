//! Algorithm enum for selecting how a generation is computed.
//!
//! Every strategy reads only the previous generation, so they all
//! produce identical grids and differ only in speed.

use super::Grid;
use crate::error::ConfigError;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row-major scan on one thread
    Serial,
    /// Rows evaluated in parallel with rayon
    #[default]
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "serial",
            Algorithm::Parallel => "parallel",
        }
    }

    /// Short description for logs
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "cell-by-cell scan, single thread",
            Algorithm::Parallel => "cell-by-cell scan, parallel rows",
        }
    }

    /// Compute the next generation with this strategy
    pub fn step(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.step(),
            Algorithm::Parallel => grid.step_parallel(),
        }
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::all()
            .into_iter()
            .find(|algo| algo.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_owned()))
    }
}
