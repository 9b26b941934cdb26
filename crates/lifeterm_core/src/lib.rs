//! # Lifeterm Core
//!
//! The simulation engine behind `lifeterm`, a terminal rendition of
//! Conway's Game of Life.
//!
//! This crate contains everything that does not touch the terminal:
//! - The bounded, double-buffered cell grid
//! - The birth/death/survival rule
//! - Seeding with an injected random source
//! - The simulation session (pause flag, step delay, generation counters)
//! - Configuration loading and validation
//!
//! ## Example
//!
//! ```
//! use lifeterm_core::engine::Engine;
//! use lifeterm_core::seed::SeedMode;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut engine = Engine::initialize(20, 40, SeedMode::AllDead, &mut rng);
//!
//! // A horizontal blinker flips to vertical after one generation.
//! engine.set_cell(5, 4, true);
//! engine.set_cell(5, 5, true);
//! engine.set_cell(5, 6, true);
//! engine.advance();
//!
//! assert!(engine.grid().is_alive(4, 5));
//! assert!(engine.grid().is_alive(6, 5));
//! assert_eq!(engine.generation(), 1);
//! assert_eq!(engine.live_cells(), 3);
//! ```

/// Configuration management for simulation, display and logging parameters
pub mod config;
/// Generation counters wrapped around a grid
pub mod engine;
/// Error types for configuration loading
pub mod error;
/// Bounded cell grid with a back buffer for simultaneous updates
pub mod grid;
/// The birth/death/survival rule
pub mod rules;
/// Grid seeding with an injected random source
pub mod seed;
/// Simulation session: engine, pause flag and step delay
pub mod session;
/// Step delay with fixed increments and clamping
pub mod speed;

pub use config::AppConfig;
pub use engine::Engine;
pub use error::ConfigError;
pub use grid::Grid;
pub use seed::SeedMode;
pub use session::{Command, Flow, Session};
pub use speed::StepDelay;
