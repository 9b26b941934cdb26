//! Terminal events to session commands.
//!
//! | Action | Binding |
//! |---|---|
//! | Quit | Ctrl+C |
//! | Pause/Resume | Ctrl+S |
//! | New (all dead) | Ctrl+N |
//! | Randomize | Ctrl+R |
//! | Sparse randomize | Ctrl+T |
//! | Speed up | Ctrl+D |
//! | Speed down | Ctrl+I (arrives as Tab on most terminals) |
//! | Revive cell | left click or drag inside the grid |

use crate::app::state::App;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use lifeterm_core::session::Command;
use lifeterm_tui::renderer::GridWidget;
use ratatui::layout::Rect;

/// Decodes one terminal event. `grid_rect` is where the grid was last drawn.
pub fn translate(event: &Event, grid_rect: Rect) -> Option<Command> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse, grid_rect),
        Event::Resize(width, height) => {
            tracing::debug!(width, height, "Resize ignored, grid size is fixed");
            None
        }
        _ => None,
    }
}

pub fn translate_key(key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Tab {
        return Some(Command::SpeedDown);
    }
    if !key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'c' => Some(Command::Quit),
            's' => Some(Command::TogglePause),
            'n' => Some(Command::Reset),
            'r' => Some(Command::Randomize),
            't' => Some(Command::RandomizeSparse),
            'd' => Some(Command::SpeedUp),
            'i' => Some(Command::SpeedDown),
            _ => None,
        },
        _ => None,
    }
}

pub fn translate_mouse(mouse: &MouseEvent, grid_rect: Rect) -> Option<Command> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            GridWidget::screen_to_grid(mouse.column, mouse.row, grid_rect)
                .map(|(row, col)| Command::Revive { row, col })
        }
        _ => None,
    }
}

impl App {
    pub fn translate(&self, event: &Event) -> Option<Command> {
        translate(event, self.last_grid_rect)
    }
}
