use lifeterm_core::engine::Engine;
use lifeterm_core::grid::Grid;
use lifeterm_core::rules;
use lifeterm_core::seed::{self, SeedMode};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

prop_compose! {
    fn arb_grid()(rows in 0usize..12, cols in 0usize..12)
        (cells in prop::collection::vec(any::<bool>(), rows * cols), rows in Just(rows), cols in Just(cols))
        -> Grid {
        Grid::from_cells(rows, cols, cells).expect("length matches")
    }
}

/// Neighbor count computed straight from the definition, with signed
/// coordinates so nothing can wrap.
fn reference_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for dr in -1i64..=1 {
        for dc in -1i64..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            let r = row as i64 + dr;
            let c = col as i64 + dc;
            if r >= 0
                && c >= 0
                && (r as usize) < grid.rows()
                && (c as usize) < grid.cols()
                && grid.is_alive(r as usize, c as usize)
            {
                count += 1;
            }
        }
    }
    count
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_neighbor_count_matches_definition(grid in arb_grid()) {
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let n = grid.live_neighbors(row, col);
                prop_assert!(n <= 8);
                prop_assert_eq!(n, reference_neighbors(&grid, row, col));
            }
        }
    }

    #[test]
    fn test_neighbor_count_ignores_self(grid in arb_grid(), flip in any::<prop::sample::Index>()) {
        prop_assume!(grid.rows() * grid.cols() > 0);
        let idx = flip.index(grid.rows() * grid.cols());
        let (row, col) = (idx / grid.cols(), idx % grid.cols());

        let mut toggled = grid.clone();
        toggled.set(row, col, !grid.is_alive(row, col));
        prop_assert_eq!(grid.live_neighbors(row, col), toggled.live_neighbors(row, col));
    }

    #[test]
    fn test_advance_applies_rule_to_every_cell(grid in arb_grid()) {
        let mut engine = Engine::from_grid(grid.clone());
        engine.advance();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let expected = rules::next_state(grid.is_alive(row, col), grid.live_neighbors(row, col));
                prop_assert_eq!(engine.grid().is_alive(row, col), expected,
                    "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_live_count_is_exact_recount(grid in arb_grid(), steps in 1u64..6) {
        let mut engine = Engine::from_grid(grid);
        for expected in 1..=steps {
            engine.advance();
            prop_assert_eq!(engine.generation(), expected);
            prop_assert_eq!(engine.live_cells(), engine.grid().cells().iter().filter(|&&a| a).count());
        }
    }

    #[test]
    fn test_set_cell_anywhere_never_panics(grid in arb_grid(), row in any::<usize>(), col in any::<usize>()) {
        let mut engine = Engine::from_grid(grid);
        let before = engine.live_cells();
        let changed = engine.set_cell(row, col, true);
        let inside = engine.grid().in_bounds(row, col);
        prop_assert!(inside || !changed);
        if !inside {
            prop_assert_eq!(engine.live_cells(), before);
        }
        prop_assert_eq!(engine.live_cells(), engine.grid().live_count());
    }

    #[test]
    fn test_rule_table(alive in any::<bool>(), n in 0u8..=8) {
        let next = rules::next_state(alive, n);
        match (alive, n) {
            (true, 2) | (true, 3) => prop_assert!(next),
            (false, 3) => prop_assert!(next),
            (false, 2) => prop_assert!(!next),
            _ => prop_assert!(!next),
        }
    }

    #[test]
    fn test_seeding_density_within_bounds(seed in any::<u64>()) {
        // 100x100 cells: the binomial standard deviation is at most 50 cells,
        // so +-5% is ten sigma.
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let dense = seed::seed(100, 100, SeedMode::random(0.5), &mut rng).live_count();
        prop_assert!((4500..=5500).contains(&dense), "dense = {}", dense);

        let sparse = seed::seed(100, 100, SeedMode::random(0.1), &mut rng).live_count();
        prop_assert!((500..=1500).contains(&sparse), "sparse = {}", sparse);
    }
}
