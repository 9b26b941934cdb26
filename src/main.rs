use anyhow::{Context, Result};
use clap::Parser;
use lifeterm_core::config::AppConfig;
use lifeterm_lib::app::{headless, App, InputPump};
use lifeterm_lib::logging::init_logging;
use lifeterm_tui::Tui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "interactive")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "lifeterm.toml")]
    config: PathBuf,

    /// Seed for the random source, for reproducible grids
    #[arg(long)]
    seed: Option<u64>,

    /// Generations to run in headless mode
    #[arg(short, long)]
    generations: Option<u64>,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Interactive,
    Headless,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = AppConfig::load_from(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    if let Some(seed) = args.seed {
        config.simulation.seed = Some(seed);
    }
    init_logging(&config.logging, matches!(args.mode, Mode::Headless))?;

    match args.mode {
        Mode::Headless => {
            let generations = args.generations.unwrap_or(config.headless.generations);
            let summary = headless::run(&config, generations);
            println!("{summary}");
        }
        Mode::Interactive => {
            let mut tui = Tui::new()?;
            tui.init()?;

            let (width, height) = tui.size()?;
            let (rows, cols) = config.display.grid_dimensions(width, height);
            tracing::info!(width, height, rows, cols, "Terminal initialized");

            let mut app = App::new(rows, cols, config);
            let mut input = InputPump::spawn();
            let res = app.run(&mut tui.terminal, input.receiver()).await;
            input.shutdown().await;

            tui.exit()?;
            res?;
            tracing::info!("Exited clean");
        }
    }

    Ok(())
}
