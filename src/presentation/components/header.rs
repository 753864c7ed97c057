//! Header bar: brand, topic menu, search field and the signed-in profile

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::nav::{InputTarget, Page, UserMenuItem},
    domain::{text::truncate_to_width, topic::menu_topics},
    presentation::{components::dashboard::BRAND_WIDTH, context::DashboardContext},
};

const MENU_WIDTH: u16 = 40;
const USER_MENU_WIDTH: u16 = 16;

#[derive(Debug, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    /// Label of the topic menu button
    pub fn menu_label(ctx: &DashboardContext<'_>) -> String {
        match ctx.current_page() {
            Page::Home => "Select Topic".to_string(),
            Page::Topic => format!("Selected: {}", ctx.current_topic()),
        }
    }

    /// Signed-in user with the menu marker, e.g. `BigHank9000 · researcher ▾`
    pub fn profile_label(ctx: &DashboardContext<'_>) -> String {
        let profile = ctx.profile();
        format!("{} · {} ▾", profile.name, profile.role)
    }

    /// Brand, topic menu, search and user slots inside the header border
    fn areas(ctx: &DashboardContext<'_>, area: Rect) -> [Rect; 4] {
        let inner = Block::bordered().inner(area);
        let user_width = Self::profile_label(ctx).chars().count() as u16 + 1;
        Layout::horizontal([
            Constraint::Length(BRAND_WIDTH.saturating_sub(1)),
            Constraint::Length(MENU_WIDTH),
            Constraint::Min(0),
            Constraint::Length(user_width),
        ])
        .areas(inner)
    }

    /// Click target that opens the user menu
    pub fn user_area(ctx: &DashboardContext<'_>, area: Rect) -> Rect {
        Self::areas(ctx, area)[3]
    }

    pub fn view(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().border_type(BorderType::Rounded);
        frame.render_widget(block, area);
        let [brand, menu, search, user] = Self::areas(ctx, area);

        let brand_style = ctx.style("brand", Style::default().fg(Color::Cyan).bold());
        frame.render_widget(Paragraph::new(Span::styled("Gnosi.ai", brand_style)), brand);

        let menu_text = truncate_to_width(
            &format!("▾ {}", Self::menu_label(ctx)),
            usize::from(menu.width.saturating_sub(1)),
        );
        let menu_style = if ctx.state().nav.topic_menu.is_some() {
            Style::default().reversed()
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(Span::styled(menu_text, menu_style)), menu);

        let nav = &ctx.state().nav;
        let searching = nav.is_inserting(InputTarget::TopicSearch);
        let search_line = if nav.topic_search.is_empty() && !searching {
            Line::from(Span::styled(
                "/ Search topics",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::raw("Search: "),
                Span::styled(nav.topic_search.as_str(), Style::default().bold()),
            ])
        };
        frame.render_widget(Paragraph::new(search_line), search);
        if searching {
            let offset = "Search: ".len() as u16 + nav.topic_search.chars().count() as u16;
            frame.set_cursor_position(Position::new(
                (search.x + offset).min(search.right().saturating_sub(1)),
                search.y,
            ));
        }

        let user_style = if ctx.state().nav.user_menu.is_some() {
            Style::default().reversed()
        } else {
            Style::default().fg(Color::Gray)
        };
        frame.render_widget(
            Paragraph::new(Self::profile_label(ctx))
                .alignment(Alignment::Right)
                .style(user_style),
            user,
        );
    }

    /// Account / Settings / Logout under the user name
    pub fn view_user_menu(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, header: Rect) {
        let screen = frame.area();
        let width = USER_MENU_WIDTH.min(screen.width);
        let x = header.right().saturating_sub(width + 1).max(screen.x);
        let items: Vec<ListItem> = UserMenuItem::iter()
            .map(|item| ListItem::new(item.to_string()))
            .collect();
        let area = Rect::new(
            x,
            header.bottom(),
            width,
            (items.len() as u16 + 2).min(screen.bottom().saturating_sub(header.bottom())),
        );

        let list = List::new(items)
            .block(Block::bordered())
            .highlight_style(ctx.style("highlight", Style::default().reversed()))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(ctx.state().nav.user_menu);

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Drop-down list of trending topics under the menu button
    pub fn view_topic_menu(&self, ctx: &DashboardContext<'_>, frame: &mut Frame, header: Rect) {
        let topics = menu_topics();
        let screen = frame.area();
        let x = (header.x + BRAND_WIDTH).min(screen.right().saturating_sub(1));
        let area = Rect::new(
            x,
            header.bottom(),
            MENU_WIDTH.min(screen.right().saturating_sub(x)),
            (topics.len() as u16 + 2).min(screen.bottom().saturating_sub(header.bottom())),
        );

        let items: Vec<ListItem> = topics.iter().map(|topic| ListItem::new(*topic)).collect();
        let list = List::new(items)
            .block(Block::bordered().title(" Trending Topics "))
            .highlight_style(ctx.style("highlight", Style::default().reversed()))
            .highlight_symbol("› ");
        let mut list_state = ListState::default().with_selected(ctx.state().nav.topic_menu);

        frame.render_widget(Clear, area);
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
