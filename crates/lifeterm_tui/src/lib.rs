pub mod renderer;
pub mod views;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};

/// Whether raw mode and the alternate screen are currently in effect.
#[derive(Debug, Default)]
struct TerminalMode {
    active: bool,
}

impl TerminalMode {
    fn enter<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        enable_raw_mode()?;
        self.active = true;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
    }

    /// Undoes `enter`. Only the first call after `enter` touches the
    /// terminal; returns whether it did.
    fn restore<W: Write>(&mut self, out: &mut W) -> io::Result<bool> {
        if !std::mem::take(&mut self.active) {
            return Ok(false);
        }
        disable_raw_mode()?;
        execute!(out, LeaveAlternateScreen, DisableMouseCapture, cursor::Show)?;
        Ok(true)
    }
}

/// Owns the real terminal for the lifetime of an interactive session.
///
/// `init` and `exit` bracket the session. `Drop` restores the terminal on
/// early returns and panics, and does nothing after a successful `exit`.
pub struct Tui {
    pub terminal: Terminal<CrosstermBackend<Stdout>>,
    mode: TerminalMode,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("Failed to open terminal backend")?;
        Ok(Self {
            terminal,
            mode: TerminalMode::default(),
        })
    }

    pub fn init(&mut self) -> Result<()> {
        self.mode
            .enter(&mut io::stdout())
            .context("Failed to enter alternate screen")?;
        self.terminal.clear()?;
        Ok(())
    }

    /// Visible area as `(width, height)` in character cells.
    pub fn size(&self) -> Result<(u16, u16)> {
        let area = self.terminal.size().context("Failed to query terminal size")?;
        Ok((area.width, area.height))
    }

    pub fn exit(&mut self) -> Result<()> {
        if self
            .mode
            .restore(&mut io::stdout())
            .context("Failed to restore terminal")?
        {
            self.terminal.show_cursor()?;
        }
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.mode.restore(&mut io::stdout());
    }
}
