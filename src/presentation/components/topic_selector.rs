//! Home page panes: trending topics and quick actions

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::nav::{HomeAction, Pane},
    presentation::{components::dashboard::pane_block, context::DashboardContext},
};

#[derive(Debug, Default)]
pub struct TopicSelectorComponent;

impl TopicSelectorComponent {
    pub fn new() -> Self {
        Self
    }

    /// Numbered topic list, one topic per row right under the border
    pub fn view_topics(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let nav = &ctx.state().nav;
        let block = pane_block(ctx, Pane::Topics, "Trending Topics");
        let topics = nav.visible_topics();

        if topics.is_empty() {
            let empty = Paragraph::new(format!("No topics match \"{}\"", nav.topic_search))
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = topics
            .iter()
            .map(|(rank, topic)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{rank:>2}. "), Style::default().fg(Color::DarkGray)),
                    Span::raw(*topic),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(ctx.style("highlight", Style::default().reversed()));
        let mut list_state = ListState::default().with_selected(Some(nav.topic_cursor));
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    pub fn view_actions(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let block = pane_block(ctx, Pane::Actions, "Actions");
        let items: Vec<ListItem> = HomeAction::iter()
            .map(|action| {
                let icon = match action {
                    HomeAction::UploadData => "⇪",
                    HomeAction::CreateTopic => "+",
                    HomeAction::UpgradeToPro => "★",
                };
                ListItem::new(format!("{icon} {action}"))
            })
            .collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(ctx.style("highlight", Style::default().reversed()));
        let selected = ctx.is_focused(Pane::Actions).then_some(ctx.state().nav.action_cursor);
        let mut list_state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
