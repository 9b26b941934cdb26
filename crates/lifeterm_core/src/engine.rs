use crate::grid::Grid;
use crate::seed::{self, SeedMode};
use rand::Rng;

/// A grid plus the counters shown in the status line.
///
/// An engine is never reset in place: reset and randomize build a new one
/// with [`Engine::initialize`] and replace the old value.
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    generation: u64,
    live_cells: usize,
}

impl Engine {
    pub fn initialize<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mode: SeedMode,
        rng: &mut R,
    ) -> Self {
        Self::from_grid(seed::seed(rows, cols, mode, rng))
    }

    /// Wraps an existing grid at generation 0.
    pub fn from_grid(grid: Grid) -> Self {
        let live_cells = grid.live_count();
        Self {
            grid,
            generation: 0,
            live_cells,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn live_cells(&self) -> usize {
        self.live_cells
    }

    /// Sets a single cell. Out-of-range coordinates are ignored.
    ///
    /// Returns `true` when the cell actually changed.
    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> bool {
        let changed = self.grid.set(row, col, alive);
        if changed {
            if alive {
                self.live_cells += 1;
            } else {
                self.live_cells -= 1;
            }
        }
        changed
    }

    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.grid.live_neighbors(row, col)
    }

    /// Advances one generation and recounts the live cells.
    pub fn advance(&mut self) {
        let stats = self.grid.step();
        self.generation += 1;
        self.live_cells = self.grid.live_count();
        tracing::trace!(
            generation = self.generation,
            live_cells = self.live_cells,
            births = stats.births,
            deaths = stats.deaths,
            "Generation advanced"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_initialize_all_dead() {
        let engine = Engine::initialize(5, 6, SeedMode::AllDead, &mut rng());
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.live_cells(), 0);
        assert_eq!(engine.grid().rows(), 5);
        assert_eq!(engine.grid().cols(), 6);
    }

    #[test]
    fn test_initialize_random_counts_live_cells() {
        let engine = Engine::initialize(20, 20, SeedMode::random(0.5), &mut rng());
        assert_eq!(engine.live_cells(), engine.grid().live_count());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_set_cell_tracks_live_count() {
        let mut engine = Engine::initialize(3, 3, SeedMode::AllDead, &mut rng());
        assert!(engine.set_cell(1, 1, true));
        assert!(!engine.set_cell(1, 1, true));
        assert_eq!(engine.live_cells(), 1);
        assert!(engine.set_cell(1, 1, false));
        assert_eq!(engine.live_cells(), 0);
        assert!(!engine.set_cell(9, 9, true));
        assert_eq!(engine.live_cells(), 0);
    }

    #[test]
    fn test_advance_counts_generations() {
        let mut engine = Engine::initialize(4, 4, SeedMode::AllDead, &mut rng());
        for expected in 1..=5 {
            engine.advance();
            assert_eq!(engine.generation(), expected);
            assert_eq!(engine.live_cells(), 0);
        }
    }
}
