//! Simulation session.
//!
//! Everything the interaction loop mutates lives here, in one explicit value:
//! the engine, the pause flag, the step delay and the random source. The
//! loop owns the session outright, so nothing is shared and nothing needs
//! locking.

use crate::config::SimulationConfig;
use crate::engine::Engine;
use crate::seed::{SeedMode, StartupSeed};
use crate::speed::StepDelay;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// A user request, already decoded from the terminal event that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    TogglePause,
    /// Replace the grid with an all-dead one and pause.
    Reset,
    /// Replace the grid with a dense random one.
    Randomize,
    /// Replace the grid with a sparse random one.
    RandomizeSparse,
    SpeedUp,
    SpeedDown,
    /// Bring a cell to life. There is no counterpart that kills a cell.
    Revive { row: usize, col: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    paused: bool,
    delay: StepDelay,
    rows: usize,
    cols: usize,
    randomize_density: f64,
    sparse_density: f64,
    rng: ChaCha8Rng,
}

impl Session {
    /// Starts a paused session on a `rows x cols` grid seeded per
    /// `config.startup`.
    pub fn new(rows: usize, cols: usize, config: &SimulationConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let startup = match config.startup {
            StartupSeed::AllDead => SeedMode::AllDead,
            StartupSeed::Sparse => SeedMode::random(config.sparse_density),
            StartupSeed::Random => SeedMode::random(config.randomize_density),
        };
        let engine = Engine::initialize(rows, cols, startup, &mut rng);
        tracing::info!(?startup, rows, cols, live_cells = engine.live_cells(), "Session started");
        Self {
            engine,
            paused: true,
            delay: config.step_delay(),
            rows,
            cols,
            randomize_density: config.randomize_density,
            sparse_density: config.sparse_density,
            rng,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn delay(&self) -> Duration {
        self.delay.current()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Quit => {
                tracing::info!(generation = self.engine.generation(), "Quit requested");
                return Flow::Quit;
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, "Pause toggled");
            }
            Command::Reset => {
                self.reinitialize(SeedMode::AllDead);
                self.paused = true;
            }
            Command::Randomize => self.reinitialize(SeedMode::random(self.randomize_density)),
            Command::RandomizeSparse => self.reinitialize(SeedMode::random(self.sparse_density)),
            Command::SpeedUp => {
                let delay = self.delay.speed_up();
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Speed up");
            }
            Command::SpeedDown => {
                let delay = self.delay.slow_down();
                tracing::debug!(delay_ms = delay.as_millis() as u64, "Speed down");
            }
            Command::Revive { row, col } => {
                self.engine.set_cell(row, col, true);
            }
        }
        Flow::Continue
    }

    /// Advances one generation unless paused. Returns whether it advanced.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.engine.advance();
        true
    }

    fn reinitialize(&mut self, mode: SeedMode) {
        self.engine = Engine::initialize(self.rows, self.cols, mode, &mut self.rng);
        tracing::info!(
            ?mode,
            rows = self.rows,
            cols = self.cols,
            live_cells = self.engine.live_cells(),
            "Grid initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SimulationConfig {
        SimulationConfig {
            seed: Some(11),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn test_starts_paused_and_dead() {
        let session = Session::new(10, 10, &config());
        assert!(session.is_paused());
        assert_eq!(session.engine().live_cells(), 0);
        assert_eq!(session.delay(), Duration::from_millis(100));
        assert_eq!(session.dimensions(), (10, 10));
    }

    #[test]
    fn test_tick_respects_pause() {
        let mut session = Session::new(4, 4, &config());
        assert!(!session.tick());
        assert_eq!(session.engine().generation(), 0);
        session.apply(Command::TogglePause);
        assert!(session.tick());
        assert_eq!(session.engine().generation(), 1);
    }

    #[test]
    fn test_reset_pauses_and_clears() {
        let mut session = Session::new(10, 10, &config());
        session.apply(Command::Randomize);
        session.apply(Command::TogglePause);
        session.tick();
        assert_eq!(session.apply(Command::Reset), Flow::Continue);
        assert!(session.is_paused());
        assert_eq!(session.engine().generation(), 0);
        assert_eq!(session.engine().live_cells(), 0);
    }

    #[test]
    fn test_randomize_keeps_pause_state() {
        let mut session = Session::new(10, 10, &config());
        session.apply(Command::TogglePause);
        session.apply(Command::Randomize);
        assert!(!session.is_paused());
        assert!(session.engine().live_cells() > 0);
    }

    #[test]
    fn test_startup_modes() {
        let sparse = Session::new(
            30,
            30,
            &SimulationConfig {
                startup: StartupSeed::Sparse,
                ..config()
            },
        );
        assert!(sparse.engine().live_cells() > 0);
        assert!(sparse.is_paused());
    }

    #[test]
    fn test_revive_never_kills() {
        let mut session = Session::new(3, 3, &config());
        session.apply(Command::Revive { row: 1, col: 1 });
        session.apply(Command::Revive { row: 1, col: 1 });
        assert!(session.engine().grid().is_alive(1, 1));
        session.apply(Command::Revive { row: 5, col: 5 });
        assert_eq!(session.engine().live_cells(), 1);
    }

    #[test]
    fn test_speed_commands() {
        let mut session = Session::new(3, 3, &config());
        session.apply(Command::SpeedUp);
        assert_eq!(session.delay(), Duration::from_millis(90));
        session.apply(Command::SpeedDown);
        session.apply(Command::SpeedDown);
        assert_eq!(session.delay(), Duration::from_millis(110));
    }

    #[test]
    fn test_quit_flow() {
        let mut session = Session::new(3, 3, &config());
        assert_eq!(session.apply(Command::Quit), Flow::Quit);
    }
}
