use std::time::{Instant, SystemTime, UNIX_EPOCH};

use super::Config;
use crate::domain::{Algorithm, Dimensions, Grid, PointBuffer, project};
use crate::input::{self, InputEvent};

/// Supplies seeds for new random generations.
pub trait SeedSource {
    fn next_seed(&mut self) -> u64;
}

impl<F: FnMut() -> u64> SeedSource for F {
    fn next_seed(&mut self) -> u64 {
        self()
    }
}

/// Always returns the same seed
#[derive(Clone, Copy, Debug)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Seeds from the wall clock, for interactive resets
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn next_seed(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos() as u64)
            .unwrap_or_default()
    }
}

/// Simulation owns the current generation and drives it frame by frame.
/// It is threaded through the frame loop and lent to the input handler.
pub struct Simulation {
    grid: Grid,
    algorithm: Algorithm,
    generation: u64,
    shutdown_requested: bool,
    last_step_time_ms: f32,
}

impl Simulation {
    /// Start from a random generation drawn from `seed`
    pub fn new(config: &Config, seed: u64) -> Self {
        Self::from_grid(Grid::randomize(config.dimensions, seed), config.algorithm)
    }

    /// Start from a prepared generation
    pub fn from_grid(grid: Grid, algorithm: Algorithm) -> Self {
        Self {
            grid,
            algorithm,
            generation: 0,
            shutdown_requested: false,
            last_step_time_ms: 0.0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> Dimensions {
        self.grid.dimensions()
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Generations computed since start or the last reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn last_step_time_ms(&self) -> f32 {
        self.last_step_time_ms
    }

    /// Replace the current generation with the next one.
    /// The new grid is complete before it replaces the old.
    pub fn advance(&mut self) {
        let start = Instant::now();
        let next = self.algorithm.step(&self.grid);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        self.grid = next;
        self.generation += 1;
        log::debug!(
            "generation {} population {} ({:.2}ms)",
            self.generation,
            self.grid.population(),
            self.last_step_time_ms
        );
    }

    /// Discard the current lineage and start over from `randomize(seed)`
    pub fn reset(&mut self, seed: u64) {
        self.grid = Grid::randomize(self.grid.dimensions(), seed);
        self.generation = 0;
        log::info!("grid reset (seed: {})", seed);
    }

    pub fn request_shutdown(&mut self) {
        if !self.shutdown_requested {
            log::info!("shutdown requested after {} generations", self.generation);
        }
        self.shutdown_requested = true;
    }

    /// Checked by the frame loop once per frame boundary
    pub fn should_exit(&self) -> bool {
        self.shutdown_requested
    }

    /// Run one frame: handle events, step once, project the new generation.
    pub fn frame<S: SeedSource>(&mut self, events: &[InputEvent], seeds: &mut S) -> PointBuffer {
        for &event in events {
            input::apply_event(self, event, seeds);
        }
        self.advance();
        project(&self.grid)
    }
}
