//! Configuration management.
//!
//! Strongly-typed structures mapped onto a TOML file. Every field has a
//! default, so a partial file (or no file at all) is valid.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. The TOML file (overrides defaults)
//! 3. Command-line flags (applied by the binary)
//!
//! ## Example `lifeterm.toml`
//!
//! ```toml
//! [simulation]
//! initial_delay_ms = 100
//! delay_step_ms = 10
//! randomize_density = 0.5
//! startup = "sparse"
//! seed = 42
//!
//! [display]
//! alive_glyph = "#"
//! dead_glyph = "."
//!
//! [logging]
//! level = "debug"
//! ```

use crate::error::{ConfigError, Result};
use crate::seed::{StartupSeed, RANDOMIZE_DENSITY, SPARSE_DENSITY};
use crate::speed::StepDelay;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Timing and seeding of the simulation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub initial_delay_ms: u64,
    pub delay_step_ms: u64,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Sleep while paused and no input is queued.
    pub idle_poll_ms: u64,
    pub randomize_density: f64,
    pub sparse_density: f64,
    pub startup: StartupSeed,
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 100,
            delay_step_ms: 10,
            min_delay_ms: 10,
            max_delay_ms: 2000,
            idle_poll_ms: 16,
            randomize_density: RANDOMIZE_DENSITY,
            sparse_density: SPARSE_DENSITY,
            startup: StartupSeed::AllDead,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn step_delay(&self) -> StepDelay {
        StepDelay::new(
            Duration::from_millis(self.initial_delay_ms),
            Duration::from_millis(self.delay_step_ms),
            Duration::from_millis(self.min_delay_ms),
            Duration::from_millis(self.max_delay_ms),
        )
    }

    pub fn idle_poll(&self) -> Duration {
        Duration::from_millis(self.idle_poll_ms)
    }
}

/// Glyphs and the screen area reserved around the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    /// Rows kept free under the grid for the status lines.
    pub status_margin_rows: u16,
    pub margin_cols: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            alive_glyph: '█',
            dead_glyph: '░',
            status_margin_rows: 3,
            margin_cols: 0,
        }
    }
}

impl DisplayConfig {
    /// Grid `(rows, cols)` for a terminal of `width x height` cells.
    pub fn grid_dimensions(&self, width: u16, height: u16) -> (usize, usize) {
        (
            height.saturating_sub(self.status_margin_rows) as usize,
            width.saturating_sub(self.margin_cols) as usize,
        )
    }
}

/// Grid used when running without a terminal.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct HeadlessConfig {
    pub rows: usize,
    pub cols: usize,
    pub generations: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            rows: 40,
            cols: 120,
            generations: 500,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub level: String,
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some(PathBuf::from("logs/lifeterm.log")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub headless: HeadlessConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Loads the config at `path`.
    ///
    /// A missing file yields the defaults, which are also written to `path`
    /// so they can be edited.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = Self::default();
                if let Err(e) = config.write_to(path) {
                    tracing::warn!(path = %path.display(), error = %e, "Could not write default config");
                }
                Ok(config)
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let sim = &self.simulation;
        for (name, density) in [
            ("randomize_density", sim.randomize_density),
            ("sparse_density", sim.sparse_density),
        ] {
            if !(0.0..=1.0).contains(&density) {
                return Err(ConfigError::Invalid(format!(
                    "simulation.{name} must be within [0, 1], got {density}"
                )));
            }
        }
        if sim.min_delay_ms == 0 {
            return Err(ConfigError::Invalid(
                "simulation.min_delay_ms must be at least 1".to_string(),
            ));
        }
        if sim.delay_step_ms == 0 {
            return Err(ConfigError::Invalid(
                "simulation.delay_step_ms must be at least 1".to_string(),
            ));
        }
        if !(sim.min_delay_ms..=sim.max_delay_ms).contains(&sim.initial_delay_ms) {
            return Err(ConfigError::Invalid(format!(
                "simulation.initial_delay_ms ({}) must lie within [{}, {}]",
                sim.initial_delay_ms, sim.min_delay_ms, sim.max_delay_ms
            )));
        }
        Ok(())
    }
}
