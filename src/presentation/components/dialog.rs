//! "Coming Soon!" upgrade dialog

use ratatui::{prelude::*, widgets::*};

use crate::presentation::context::DashboardContext;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 7;

#[derive(Debug, Default)]
pub struct UpgradeDialogComponent;

/// Rectangle of `width` x `height` centered in `area`, clipped to it
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl UpgradeDialogComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let popup = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .title(Line::from(" Coming Soon! ").bold().centered())
            .border_style(ctx.style("brand", Style::default().fg(Color::Cyan)));
        let text = vec![
            Line::default(),
            Line::from("Pro features are on their way.").centered(),
            Line::from("Stay tuned!").centered(),
            Line::default(),
            Line::from("[Enter] Close").fg(Color::DarkGray).centered(),
        ];

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(text).block(block), popup);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_centered_popup() {
        let area = Rect::new(0, 0, 100, 30);
        assert_eq!(centered(area, 44, 7), Rect::new(28, 11, 44, 7));
        assert_eq!(centered(Rect::new(0, 0, 20, 4), 44, 7), Rect::new(0, 0, 20, 4));
    }
}
