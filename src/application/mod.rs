mod config;
mod simulation;

pub use config::{Config, ALGORITHM_VAR, DEFAULT_HEIGHT, DEFAULT_WIDTH, HEIGHT_VAR, SEED_VAR, WIDTH_VAR};
pub use simulation::{ClockSeed, FixedSeed, SeedSource, Simulation};
