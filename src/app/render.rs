use crate::app::state::App;
use lifeterm_tui::renderer::GridWidget;
use lifeterm_tui::views::status::StatusWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// Lines reserved for the status block under the grid.
const STATUS_HEIGHT: u16 = 2;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let engine = self.session.engine();
        let grid = engine.grid();
        let area = f.area();

        let grid_rect = GridWidget::grid_area(grid.rows(), grid.cols(), area);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(grid_rect.height),
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Min(0),
            ])
            .split(area);

        self.last_grid_rect = grid_rect.intersection(layout[0]);

        let display = &self.config.display;
        f.render_widget(
            GridWidget::new(grid, display.alive_glyph, display.dead_glyph),
            self.last_grid_rect,
        );
        f.render_widget(
            StatusWidget {
                generation: engine.generation(),
                live_cells: engine.live_cells(),
                delay: self.session.delay(),
                paused: self.session.is_paused(),
            },
            layout[1],
        );
    }
}
