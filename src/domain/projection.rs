//! Projection of a generation into the point list handed to the renderer.

use super::Grid;

/// Points for one frame, one `[x, y, z]` per live cell in row-major order.
/// Built fresh from a generation and dropped after it is drawn.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBuffer {
    points: Vec<[f32; 3]>,
}

impl PointBuffer {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[[f32; 3]] {
        &self.points
    }

    /// Flat `x, y, z, x, y, z, ...` layout, three floats per point
    pub fn as_flat(&self) -> &[f32] {
        self.points.as_flattened()
    }
}

/// Map cell (i, j) to `(2i/W - 1, 2j/H - 1, 0)`, covering [-1, 1) on both axes.
pub fn project(grid: &Grid) -> PointBuffer {
    let dims = grid.dimensions();
    let (w, h) = (dims.width() as f32, dims.height() as f32);

    let points = grid
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(i, j, _)| [(i as f32 * 2.0 / w) - 1.0, (j as f32 * 2.0 / h) - 1.0, 0.0])
        .collect();

    PointBuffer { points }
}
