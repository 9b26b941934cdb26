use lifeterm_core::grid::Grid;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Draws one glyph per grid cell, anchored at the area's top-left corner.
///
/// Cells that do not fit in the area are skipped.
pub struct GridWidget<'a> {
    grid: &'a Grid,
    alive_glyph: char,
    dead_glyph: char,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, alive_glyph: char, dead_glyph: char) -> Self {
        Self {
            grid,
            alive_glyph,
            dead_glyph,
        }
    }

    /// The part of `area` actually covered by a `rows x cols` grid.
    pub fn grid_area(rows: usize, cols: usize, area: Rect) -> Rect {
        Rect {
            x: area.x,
            y: area.y,
            width: area.width.min(u16::try_from(cols).unwrap_or(u16::MAX)),
            height: area.height.min(u16::try_from(rows).unwrap_or(u16::MAX)),
        }
    }

    /// Maps a terminal position onto `(row, col)` of a grid drawn in `area`.
    pub fn screen_to_grid(screen_x: u16, screen_y: u16, area: Rect) -> Option<(usize, usize)> {
        if screen_x >= area.left()
            && screen_x < area.right()
            && screen_y >= area.top()
            && screen_y < area.bottom()
        {
            Some(((screen_y - area.y) as usize, (screen_x - area.x) as usize))
        } else {
            None
        }
    }

    pub fn glyph_for(&self, alive: bool) -> char {
        if alive {
            self.alive_glyph
        } else {
            self.dead_glyph
        }
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = Self::grid_area(self.grid.rows(), self.grid.cols(), area).intersection(buf.area);
        for y in 0..inner.height {
            let Some(row) = self.grid.row(y as usize) else {
                break;
            };
            for x in 0..inner.width {
                let alive = row[x as usize];
                buf[(inner.x + x, inner.y + y)].set_char(self.glyph_for(alive));
            }
        }
    }
}
