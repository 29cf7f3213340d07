use super::{Dimensions, Grid};

/// A small known shape that can be stamped onto an empty generation
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Generation containing only this pattern with its top-left corner at
    /// (x, y). Cells past the edge wrap around.
    pub fn to_grid(&self, dims: Dimensions, x: usize, y: usize) -> Grid {
        Grid::from_live_cells(dims, self.cells.iter().map(|(dx, dy)| (x + dx, y + dy)))
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    /// Blinker in its vertical phase
    pub fn blinker_vertical() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(1, 0), (1, 1), (1, 2)])
    }

    /// Block - still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![blinker(), block(), toad(), beacon(), glider()]
    }
}
