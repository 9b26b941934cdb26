pub mod macros;

use lifeterm_core::engine::Engine;
use lifeterm_core::grid::Grid;

/// Hand-built grids for rule tests.
#[allow(dead_code)]
pub struct GridBuilder {
    grid: Grid,
}

#[allow(dead_code)]
impl GridBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            grid: Grid::new(rows, cols),
        }
    }

    pub fn alive(mut self, row: usize, col: usize) -> Self {
        self.grid.set(row, col, true);
        self
    }

    /// Stamps `pattern` with its top-left corner at `(row, col)`.
    /// `#` or `O` is alive, anything else is left untouched.
    pub fn pattern(mut self, row: usize, col: usize, pattern: &[&str]) -> Self {
        for (dr, line) in pattern.iter().enumerate() {
            for (dc, ch) in line.chars().enumerate() {
                if ch == '#' || ch == 'O' {
                    self.grid.set(row + dr, col + dc, true);
                }
            }
        }
        self
    }

    pub fn build(self) -> Grid {
        self.grid
    }

    pub fn engine(self) -> Engine {
        Engine::from_grid(self.grid)
    }
}

/// Positions of live cells, row-major.
#[allow(dead_code)]
pub fn live_positions(grid: &Grid) -> Vec<(usize, usize)> {
    let mut out = Vec::new();
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if grid.is_alive(row, col) {
                out.push((row, col));
            }
        }
    }
    out
}
