//! Grid seeding.
//!
//! The random source is always passed in, so callers decide between an
//! entropy-seeded generator for play and a fixed seed for reproducible runs.

use crate::grid::Grid;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Density used by the "Randomize" action.
pub const RANDOMIZE_DENSITY: f64 = 0.5;
/// Density used for the sparse seeding variant.
pub const SPARSE_DENSITY: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeedMode {
    AllDead,
    /// Each cell is alive independently with probability `density`.
    RandomSparse { density: f64 },
}

impl SeedMode {
    pub fn random(density: f64) -> Self {
        SeedMode::RandomSparse { density }
    }
}

/// How the first grid of an interactive session is seeded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartupSeed {
    #[default]
    AllDead,
    Sparse,
    Random,
}

/// Builds a `rows x cols` grid according to `mode`.
///
/// Densities outside `[0, 1]` are clamped; NaN seeds nothing.
pub fn seed<R: Rng + ?Sized>(rows: usize, cols: usize, mode: SeedMode, rng: &mut R) -> Grid {
    match mode {
        SeedMode::AllDead => Grid::new(rows, cols),
        SeedMode::RandomSparse { density } => {
            let p = if density.is_nan() {
                0.0
            } else {
                density.clamp(0.0, 1.0)
            };
            let cells = (0..rows * cols).map(|_| rng.gen_bool(p)).collect();
            // Length matches by construction.
            Grid::from_cells(rows, cols, cells).unwrap_or_else(|| Grid::new(rows, cols))
        }
    }
}
