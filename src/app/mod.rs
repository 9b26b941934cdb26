pub mod events;
pub mod headless;
pub mod input;
pub mod render;
pub mod state;

pub use events::InputPump;
pub use state::App;

use anyhow::Result;
use crossterm::event::Event;
use lifeterm_core::session::{Command, Flow};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::mpsc::UnboundedReceiver;

/// What one loop iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A queued event was serviced; `None` if it mapped to no command.
    Handled(Option<Command>),
    /// No input was queued and one generation was advanced.
    Advanced,
    /// No input was queued and the session is paused.
    Idle,
    /// The loop is done.
    Quit,
}

impl App {
    pub async fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut UnboundedReceiver<Event>,
    ) -> Result<()> {
        terminal.draw(|f| self.draw(f))?;

        while self.running {
            if self.step(terminal, events).await? == Step::Quit {
                break;
            }
        }

        tracing::info!(
            generation = self.session.engine().generation(),
            live_cells = self.session.engine().live_cells(),
            "Interaction loop finished"
        );
        Ok(())
    }

    /// Runs one iteration: service a queued event if there is one, otherwise
    /// advance (when unpaused) and sleep. Every iteration except the last
    /// ends with a render.
    pub async fn step<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut UnboundedReceiver<Event>,
    ) -> Result<Step> {
        let step = match events.try_recv() {
            Ok(event) => {
                let command = self.translate(&event);
                if let Some(command) = command {
                    if self.session.apply(command) == Flow::Quit {
                        self.running = false;
                        return Ok(Step::Quit);
                    }
                }
                Step::Handled(command)
            }
            Err(TryRecvError::Empty) => {
                if self.session.tick() {
                    tokio::time::sleep(self.session.delay()).await;
                    Step::Advanced
                } else {
                    tokio::time::sleep(self.config.simulation.idle_poll()).await;
                    Step::Idle
                }
            }
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("Input queue disconnected, stopping");
                self.running = false;
                return Ok(Step::Quit);
            }
        };

        terminal.draw(|f| self.draw(f))?;
        Ok(step)
    }
}
