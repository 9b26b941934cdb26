use lifeterm_core::config::AppConfig;
use lifeterm_core::session::Session;
use ratatui::layout::Rect;

pub struct App {
    pub running: bool,
    pub session: Session,
    pub config: AppConfig,
    /// Screen area the grid occupied in the last frame, for pointer hit tests.
    pub last_grid_rect: Rect,
}

impl App {
    /// Builds a paused session on a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize, config: AppConfig) -> Self {
        let session = Session::new(rows, cols, &config.simulation);
        Self {
            running: true,
            session,
            config,
            last_grid_rect: Rect::default(),
        }
    }
}
