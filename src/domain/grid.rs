use super::Cell;
use crate::error::{GridError, MAX_CELLS, MIN_EXTENT};
use rand::{Rng, SeedableRng, rngs::StdRng};
use rayon::prelude::*;

/// Validated grid extent. Both axes are at least 3, so no neighbor
/// offset can wrap back onto the cell it started from, and W * H never
/// exceeds `MAX_CELLS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width < MIN_EXTENT || height < MIN_EXTENT {
            return Err(GridError::TooSmall { width, height });
        }
        match width.checked_mul(height) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => return Err(GridError::TooLarge { width, height }),
        }
        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells, W * H
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// One generation of the automaton on a toroidal grid.
/// A generation is never edited once built; stepping returns a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![Cell::Dead; dims.cell_count()],
        }
    }

    /// Build a generation whose only live cells are `live`.
    /// Coordinates outside the grid wrap around.
    pub fn from_live_cells<I>(dims: Dimensions, live: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(dims);
        for (x, y) in live {
            let idx = grid.get_index(x % dims.width, y % dims.height);
            grid.cells[idx] = Cell::Alive;
        }
        grid
    }

    /// Fill a whole grid where every cell is alive with probability 0.5.
    /// The same seed always produces the same grid.
    pub fn randomize(dims: Dimensions, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let cells = (0..dims.cell_count())
            .map(|_| Cell::from_alive(rng.random_bool(0.5)))
            .collect();
        Self { dims, cells }
    }

    pub const fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.dims.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.dims.width && y < self.dims.height).then(|| self.cells[self.get_index(x, y)])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Count live neighbors of (x, y) with toroidal wrapping on both axes.
    /// The cell itself is never counted. Result is in 0..=8.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.dims.width as isize;
        let h = self.dims.height as isize;

        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(|(dx, dy)| {
                let nx = (x as isize + dx).rem_euclid(w) as usize;
                let ny = (y as isize + dy).rem_euclid(h) as usize;
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, x: usize, y: usize) -> Cell {
        self.cells[self.get_index(x, y)].evolve(self.count_live_neighbors(x, y))
    }

    /// Pure functional evolution - returns the next generation (serial)
    pub fn step(&self) -> Self {
        let (w, h) = (self.dims.width, self.dims.height);
        let cells = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| self.next_cell(x, y))
            .collect();

        Self {
            dims: self.dims,
            cells,
        }
    }

    /// Parallel evolution using rayon, one task per row.
    /// Only the old generation is read, so the result matches `step`.
    pub fn step_parallel(&self) -> Self {
        let (w, h) = (self.dims.width, self.dims.height);
        let cells: Vec<Cell> = (0..h)
            .into_par_iter()
            .flat_map_iter(|y| (0..w).map(move |x| self.next_cell(x, y)))
            .collect();

        Self {
            dims: self.dims,
            cells,
        }
    }

    /// Iterate over all cells in row-major order with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let w = self.dims.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % w, idx / w, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: usize, h: usize) -> Dimensions {
        Dimensions::new(w, h).unwrap()
    }

    #[test]
    fn test_rejects_undersized_dimensions() {
        assert_eq!(
            Dimensions::new(2, 10),
            Err(GridError::TooSmall { width: 2, height: 10 })
        );
        assert!(Dimensions::new(10, 0).is_err());
        assert!(Dimensions::new(3, 3).is_ok());
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        assert_eq!(
            Dimensions::new(usize::MAX, 4),
            Err(GridError::TooLarge { width: usize::MAX, height: 4 })
        );
        assert!(Dimensions::new(MAX_CELLS, 3).is_err());
        assert!(Dimensions::new(10_000, 10_000).is_ok());
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(dims(7, 4));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.get(6, 3), Some(Cell::Dead));
        assert_eq!(grid.get(7, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_from_live_cells_wraps() {
        let grid = Grid::from_live_cells(dims(5, 5), [(1, 2), (6, 5)]);
        assert!(grid.is_alive(1, 2));
        assert!(grid.is_alive(1, 0));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn test_randomize_is_deterministic() {
        let d = dims(40, 30);
        assert_eq!(Grid::randomize(d, 42), Grid::randomize(d, 42));
        assert_ne!(Grid::randomize(d, 42), Grid::randomize(d, 43));
    }

    #[test]
    fn test_randomize_is_roughly_half_alive() {
        let d = dims(100, 100);
        let population = Grid::randomize(d, 7).population();
        assert!(
            (4_000..=6_000).contains(&population),
            "population {population} far from 50%"
        );
    }

    #[test]
    fn test_toroidal_neighbors() {
        let grid = Grid::from_live_cells(dims(5, 5), [(0, 0)]);

        assert_eq!(grid.count_live_neighbors(4, 4), 1);
        assert_eq!(grid.count_live_neighbors(4, 0), 1);
        assert_eq!(grid.count_live_neighbors(0, 4), 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 1);
        // The cell itself is excluded
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
        // Not adjacent even with wrapping
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
    }

    #[test]
    fn test_neighbor_count_on_full_grid() {
        let d = dims(3, 3);
        let grid = Grid::from_live_cells(d, (0..3).flat_map(|y| (0..3).map(move |x| (x, y))));
        for (x, y, _) in grid.iter_cells() {
            assert_eq!(grid.count_live_neighbors(x, y), 8);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        let d = dims(6, 6);
        // (2,2) is dead with 3 neighbors
        let three = Grid::from_live_cells(d, [(1, 1), (2, 1), (3, 1)]);
        assert_eq!(three.count_live_neighbors(2, 2), 3);
        assert!(three.step().is_alive(2, 2));

        let two = Grid::from_live_cells(d, [(1, 1), (3, 1)]);
        assert!(!two.step().is_alive(2, 2));

        let four = Grid::from_live_cells(d, [(1, 1), (2, 1), (3, 1), (1, 3)]);
        assert_eq!(four.count_live_neighbors(2, 2), 4);
        assert!(!four.step().is_alive(2, 2));
    }

    #[test]
    fn test_survival_and_death() {
        let d = dims(7, 7);
        let center = (3, 3);
        let ring = [(2, 2), (3, 2), (4, 2), (2, 3), (4, 3)];

        for n in 0..=5 {
            let live = std::iter::once(center).chain(ring.iter().copied().take(n));
            let next = Grid::from_live_cells(d, live).step();
            let survives = n == 2 || n == 3;
            assert_eq!(next.is_alive(3, 3), survives, "{n} neighbors");
        }
    }

    #[test]
    fn test_step_does_not_touch_input() {
        let grid = Grid::randomize(dims(20, 15), 99);
        let before = grid.clone();
        let a = grid.step();
        let b = grid.step();
        assert_eq!(grid, before);
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut serial = Grid::randomize(dims(64, 37), 1234);
        let mut parallel = serial.clone();
        for _ in 0..10 {
            serial = serial.step();
            parallel = parallel.step_parallel();
            assert_eq!(serial, parallel);
        }
    }

    #[test]
    fn test_population_stays_in_bounds() {
        let d = dims(16, 9);
        let mut grid = Grid::randomize(d, 5);
        for _ in 0..50 {
            assert!(grid.population() <= d.cell_count());
            grid = grid.step();
        }
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let grid = Grid::new(dims(3, 4));
        let positions: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).take(4).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
        assert_eq!(grid.iter_cells().count(), 12);
    }
}
