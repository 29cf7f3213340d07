//! Startup configuration. Read once, validated, then never changed.

use crate::domain::{Algorithm, Dimensions};
use crate::error::ConfigError;

/// Size of the original 230x230 window, one cell per pixel
pub const DEFAULT_WIDTH: usize = 230;
pub const DEFAULT_HEIGHT: usize = 230;

pub const WIDTH_VAR: &str = "LIFE_WIDTH";
pub const HEIGHT_VAR: &str = "LIFE_HEIGHT";
pub const ALGORITHM_VAR: &str = "LIFE_ALGORITHM";
pub const SEED_VAR: &str = "LIFE_SEED";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub dimensions: Dimensions,
    pub algorithm: Algorithm,
    /// Seed for the first generation. When unset the frame loop draws one
    /// from the clock.
    pub seed: Option<u64>,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from any variable lookup. Missing variables take
    /// their defaults; present but malformed ones are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let width = parse_number(WIDTH_VAR, lookup(WIDTH_VAR))?.unwrap_or(DEFAULT_WIDTH as u64);
        let height = parse_number(HEIGHT_VAR, lookup(HEIGHT_VAR))?.unwrap_or(DEFAULT_HEIGHT as u64);
        let algorithm = lookup(ALGORITHM_VAR)
            .map(|value| value.parse::<Algorithm>())
            .transpose()?
            .unwrap_or_default();
        let seed = parse_number(SEED_VAR, lookup(SEED_VAR))?;

        Ok(Self {
            dimensions: Dimensions::new(to_extent(WIDTH_VAR, width)?, to_extent(HEIGHT_VAR, height)?)?,
            algorithm,
            seed,
        })
    }
}

fn to_extent(var: &'static str, value: u64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::InvalidNumber {
        var,
        value: value.to_string(),
    })
}

fn parse_number(var: &'static str, value: Option<String>) -> Result<Option<u64>, ConfigError> {
    value
        .map(|raw| {
            raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                var,
                value: raw.clone(),
            })
        })
        .transpose()
}
