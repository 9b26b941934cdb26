/// Asserts that the cell at `(row, col)` of an engine is alive.
#[macro_export]
macro_rules! assert_alive {
    ($engine:expr, $row:expr, $col:expr) => {
        assert!(
            $engine.grid().is_alive($row, $col),
            "Cell ({}, {}) should be alive at generation {}",
            $row,
            $col,
            $engine.generation()
        );
    };
}

/// Asserts that the cell at `(row, col)` of an engine is dead.
#[macro_export]
macro_rules! assert_dead {
    ($engine:expr, $row:expr, $col:expr) => {
        assert!(
            !$engine.grid().is_alive($row, $col),
            "Cell ({}, {}) should be dead at generation {}",
            $row,
            $col,
            $engine.generation()
        );
    };
}

/// Asserts the live-cell counter matches both `$count` and an exact recount.
#[macro_export]
macro_rules! assert_population {
    ($engine:expr, $count:expr) => {
        assert_eq!($engine.live_cells(), $count, "Population count mismatch");
        assert_eq!(
            $engine.grid().live_count(),
            $count,
            "Population recount mismatch"
        );
    };
}
