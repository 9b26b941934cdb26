use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};
use std::time::Duration;

pub const LEGEND: &str = "Shortcuts: Quit (Ctrl+C) | New (Ctrl+N) | Start/Pause (Ctrl+S) | Random (Ctrl+R) | Sparse (Ctrl+T) | Set Cell Alive (Mouse Click) | Speed Up (Ctrl+D) | Speed Down (Ctrl+I)";

/// Two status lines: counters on top, the key legend below.
pub struct StatusWidget {
    pub generation: u64,
    pub live_cells: usize,
    pub delay: Duration,
    pub paused: bool,
}

impl StatusWidget {
    pub fn stats_line(&self) -> String {
        format!(
            "Generation: {} | Alive: {} | Speed: {}ms | {}",
            self.generation,
            self.live_cells,
            self.delay.as_millis(),
            if self.paused { "Paused" } else { "Running" }
        )
    }
}

impl Widget for StatusWidget {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let status_lines = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let style = Style::default().fg(Color::Cyan);
        Paragraph::new(self.stats_line())
            .style(style.add_modifier(Modifier::BOLD))
            .render(status_lines[0], buf);
        Paragraph::new(LEGEND).style(style).render(status_lines[1], buf);
    }
}
