//! Bounded cell grid for the automaton.
//!
//! Cells are stored row-major in a flat `Vec<bool>`. A second buffer of the
//! same size receives the next generation so that every cell is evaluated
//! against the same snapshot; the buffers are swapped once the pass is done.
//! Coordinates outside `[0, rows) x [0, cols)` read as dead and writes to them
//! are dropped. There is no wrap-around.

use crate::rules::{self, Transition};

/// Relative offsets of the Moore neighborhood.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cells that changed state during one [`Grid::step`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    pub births: usize,
    pub deaths: usize,
}

#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<bool>,
    back_buffer: Vec<bool>,
    rows: usize,
    cols: usize,
}

// The back buffer holds stale scratch data and takes no part in equality.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        let cells = vec![false; rows * cols];
        let back_buffer = cells.clone();
        Self {
            cells,
            back_buffer,
            rows,
            cols,
        }
    }

    /// Builds a grid from row-major liveness flags.
    ///
    /// Returns `None` when `cells.len() != rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Option<Self> {
        if cells.len() != rows * cols {
            return None;
        }
        let back_buffer = vec![false; cells.len()];
        Some(Self {
            cells,
            back_buffer,
            rows,
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Liveness at `(row, col)`. Out-of-range positions are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cells[self.index(row, col)]
    }

    /// Sets liveness at `(row, col)`.
    ///
    /// Returns `true` if the stored value changed. Out-of-range positions are
    /// ignored and report `false`.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> bool {
        if !self.in_bounds(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        let changed = self.cells[idx] != alive;
        self.cells[idx] = alive;
        changed
    }

    /// Counts live cells among the 8 surrounding positions.
    ///
    /// Neighbors outside the grid count as dead; the cell itself is never
    /// counted.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if self.is_alive(r, c) {
                count += 1;
            }
        }
        count
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Row `row` as a slice of liveness flags, or `None` past the last row.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    /// Row-major view of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Computes the next generation into the back buffer and swaps it in.
    ///
    /// Every decision reads the pre-step buffer, so the result does not
    /// depend on evaluation order.
    pub fn step(&mut self) -> StepStats {
        let mut stats = StepStats::default();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let alive = self.cells[idx];
                let transition = rules::transition(alive, self.live_neighbors(row, col));
                match transition {
                    Transition::Birth => stats.births += 1,
                    Transition::Underpopulation | Transition::Overpopulation if alive => {
                        stats.deaths += 1
                    }
                    _ => {}
                }
                self.back_buffer[idx] = transition.apply(alive);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.back_buffer);
        stats
    }
}
