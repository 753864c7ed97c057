//! Status bar component
//!
//! Two rows at the bottom of the screen: mode, focus and pane widths on the
//! first, the latest status message on the second.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::nav::UiMode, presentation::context::DashboardContext};

#[derive(Debug, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Pane widths rounded to whole percent, e.g. `25% | 50% | 25%`
    pub fn widths_label(ctx: &DashboardContext<'_>) -> String {
        ctx.panes()
            .widths()
            .iter()
            .map(|width| format!("{width:.0}%"))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let [info, message] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let style = ctx.style("status", Style::default().fg(Color::Gray).bg(Color::Black));

        let mode = match ctx.state().nav.mode {
            UiMode::Normal => "NORMAL",
            UiMode::Insert(_) => "INSERT",
        };
        let mut spans = vec![
            Span::styled(format!(" {mode} "), Style::default().reversed().bold()),
            Span::raw(format!(" {:?} ", ctx.focus())),
            Span::raw(format!("│ {} ", Self::widths_label(ctx))),
        ];
        if ctx.panes().is_dragging() {
            spans.push(Span::styled("│ resizing", Style::default().fg(Color::Yellow)));
        }

        frame.render_widget(Clear, info);
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), info);

        frame.render_widget(Clear, message);
        frame.render_widget(
            Paragraph::new(ctx.status_message().unwrap_or_default()),
            message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{nav::Page, AppState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_widths_label() {
        let mut state = AppState::default();
        assert_eq!(
            StatusBarComponent::widths_label(&DashboardContext::new(&state)),
            "75% | 25%"
        );
        state.nav.page = Page::Topic;
        assert_eq!(
            StatusBarComponent::widths_label(&DashboardContext::new(&state)),
            "25% | 50% | 25%"
        );
    }
}
