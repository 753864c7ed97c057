use ratatui::{prelude::*, widgets::Widget};

/// One-column vertical bar between two panes
#[derive(Debug, Clone, Copy)]
pub struct DividerWidget {
    active: bool,
    style: Style,
}

impl DividerWidget {
    pub fn new(style: Style) -> Self {
        Self {
            active: false,
            style,
        }
    }

    /// Mark the divider as the one being dragged
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    fn symbol(&self) -> &'static str {
        if self.active {
            symbols::line::THICK_VERTICAL
        } else {
            symbols::line::VERTICAL
        }
    }
}

impl Widget for DividerWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let symbol = self.symbol();
        for y in area.top()..area.bottom() {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_symbol(symbol).set_style(self.style);
            }
        }
    }
}
