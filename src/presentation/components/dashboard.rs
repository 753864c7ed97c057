//! Dashboard frame: header, the resizable pane row and the status bar
//!
//! The geometry helpers here are shared with the translator so mouse
//! hit-testing agrees with what is drawn.

use ratatui::{prelude::*, widgets::Block};

use crate::{
    core::state::nav::Pane,
    presentation::{
        components::{
            agent_chat::AgentChatComponent, analysis_panel::AnalysisPanelComponent,
            article_viewer::ArticleViewerComponent, dialog::UpgradeDialogComponent,
            header::HeaderComponent, status_bar::StatusBarComponent,
            topic_selector::TopicSelectorComponent,
        },
        context::DashboardContext,
        widgets::divider::DividerWidget,
    },
};

/// Rows taken by the header, borders included
pub const HEADER_HEIGHT: u16 = 3;
/// Rows taken by the status bar
pub const STATUS_HEIGHT: u16 = 2;
/// Columns of the header that act as the home button
pub const BRAND_WIDTH: u16 = 12;

/// Area between the header and the status bar
pub fn body_area(area: Rect) -> Rect {
    let [_, body, _] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);
    body
}

/// Pane rectangles and divider columns of the current page inside `body`
pub fn pane_areas(ctx: &DashboardContext<'_>, body: Rect) -> (Vec<Rect>, Vec<Rect>) {
    let row = ctx.panes();
    let panes = row
        .column_spans(body.width)
        .into_iter()
        .map(|(start, len)| Rect::new(body.x + start, body.y, len, body.height))
        .collect();
    let dividers = row
        .divider_columns(body.width)
        .into_iter()
        .map(|column| Rect::new(body.x + column, body.y, 1, body.height))
        .collect();
    (panes, dividers)
}

/// Bordered block of a pane, highlighted while it has focus
pub fn pane_block<'a>(ctx: &DashboardContext<'_>, pane: Pane, title: &'a str) -> Block<'a> {
    let border_style = if ctx.is_focused(pane) {
        ctx.style("focused_border", Style::default().fg(Color::Cyan))
    } else {
        Style::default()
    };
    Block::bordered()
        .title(Line::from(format!(" {title} ")).bold())
        .border_style(border_style)
}

/// Rows `lines` take when wrapped to `width`, rounded up per line
pub fn wrapped_height(lines: &[Line<'_>], width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let rows: usize = lines
        .iter()
        .map(|line| line.width().div_ceil(width).max(1))
        .sum();
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Root view of the dashboard
#[derive(Debug, Default)]
pub struct DashboardComponent {
    header: HeaderComponent,
    topics: TopicSelectorComponent,
    chat: AgentChatComponent,
    article: ArticleViewerComponent,
    analysis: AnalysisPanelComponent,
    status_bar: StatusBarComponent,
    dialog: UpgradeDialogComponent,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let [header, body, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        self.header.view(ctx, frame, header);
        self.view_body(ctx, frame, body);
        self.status_bar.view(ctx, frame, status);

        // Overlays go last so they sit on top of the panes
        if ctx.state().nav.topic_menu.is_some() {
            self.header.view_topic_menu(ctx, frame, header);
        }
        if ctx.state().nav.user_menu.is_some() {
            self.header.view_user_menu(ctx, frame, header);
        }
        if ctx.show_upgrade_dialog() {
            self.dialog.view(ctx, frame, area);
        }
    }

    fn view_body(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, body: Rect) {
        let (pane_rects, divider_rects) = pane_areas(ctx, body);
        let page = ctx.current_page();

        for (pane, rect) in page.panes().iter().zip(pane_rects) {
            if rect.width == 0 {
                continue;
            }
            match pane {
                Pane::Topics => self.topics.view_topics(ctx, frame, rect),
                Pane::Actions => self.topics.view_actions(ctx, frame, rect),
                Pane::Chat => self.chat.view(ctx, frame, rect),
                Pane::Article => self.article.view(ctx, frame, rect),
                Pane::Analysis => self.analysis.view(ctx, frame, rect),
            }
        }

        let active = ctx.panes().drag_state().active_divider();
        let divider_style = ctx.style("divider", Style::default().fg(Color::DarkGray));
        let active_style = ctx.style("divider_active", Style::default().fg(Color::Yellow).bold());
        for (index, rect) in divider_rects.into_iter().enumerate() {
            let is_active = active == Some(index);
            let style = if is_active { active_style } else { divider_style };
            frame.render_widget(DividerWidget::new(style).active(is_active), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{nav::Page, AppState};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrapped_height() {
        let lines = vec![Line::from("abcdef"), Line::default(), Line::from("abc")];
        assert_eq!(wrapped_height(&lines, 4), 4);
        assert_eq!(wrapped_height(&lines, 10), 3);
    }

    #[test]
    fn test_body_area_leaves_header_and_status() {
        let body = body_area(Rect::new(0, 0, 100, 30));
        assert_eq!(body, Rect::new(0, HEADER_HEIGHT, 100, 30 - HEADER_HEIGHT - STATUS_HEIGHT));
    }

    #[test]
    fn test_pane_areas_follow_widths() {
        let mut state = AppState::default();
        state.nav.page = Page::Topic;
        let ctx = DashboardContext::new(&state);
        let (panes, dividers) = pane_areas(&ctx, Rect::new(0, 3, 100, 20));

        assert_eq!(
            dividers,
            vec![Rect::new(25, 3, 1, 20), Rect::new(75, 3, 1, 20)]
        );
        assert_eq!(
            panes,
            vec![
                Rect::new(0, 3, 25, 20),
                Rect::new(26, 3, 49, 20),
                Rect::new(76, 3, 24, 20),
            ]
        );
    }
}
