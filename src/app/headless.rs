//! Running without a terminal.

use lifeterm_core::config::AppConfig;
use lifeterm_core::session::{Command, Session};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub generation: u64,
    pub live_cells: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Generation: {} | Alive: {}",
            self.generation, self.live_cells
        )
    }
}

/// Randomizes a `headless.rows x headless.cols` grid and advances it
/// `generations` times without sleeping.
pub fn run(config: &AppConfig, generations: u64) -> Summary {
    let mut session = Session::new(
        config.headless.rows,
        config.headless.cols,
        &config.simulation,
    );
    session.apply(Command::Randomize);
    session.apply(Command::TogglePause);

    tracing::info!(
        rows = config.headless.rows,
        cols = config.headless.cols,
        generations,
        "Running headless"
    );
    for _ in 0..generations {
        session.tick();
    }
    if session.engine().live_cells() == 0 {
        tracing::info!("Population died out");
    }

    Summary {
        generation: session.engine().generation(),
        live_cells: session.engine().live_cells(),
    }
}
