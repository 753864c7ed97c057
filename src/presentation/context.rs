//! Read-only view of the dashboard handed to every component
//!
//! Views never touch `AppState` fields directly for cross-component data.
//! They read through accessors here and turn clicks and key presses into
//! messages through the `handle_*` methods.

use ratatui::style::Style;

use crate::{
    core::{
        msg::{nav::NavMsg, Msg},
        state::{
            nav::{Page, Pane, UserMenuItem},
            AppState,
        },
    },
    domain::layout::PaneLayout,
    infrastructure::config::ProfileConfig,
};

#[derive(Clone, Copy)]
pub struct DashboardContext<'a> {
    state: &'a AppState,
}

impl<'a> DashboardContext<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &'a AppState {
        self.state
    }

    pub fn current_page(&self) -> Page {
        self.state.nav.page
    }

    pub fn current_topic(&self) -> &'a str {
        &self.state.nav.current_topic
    }

    pub fn current_article(&self) -> &'a str {
        &self.state.nav.current_article
    }

    pub fn show_upgrade_dialog(&self) -> bool {
        self.state.nav.show_upgrade_dialog
    }

    pub fn profile(&self) -> &'a ProfileConfig {
        &self.state.config.config.profile
    }

    pub fn focus(&self) -> Pane {
        self.state.nav.focus
    }

    pub fn is_focused(&self, pane: Pane) -> bool {
        self.state.nav.focus == pane
    }

    /// Pane row of the current page
    pub fn panes(&self) -> &'a PaneLayout {
        self.state.layout.row(self.state.nav.page)
    }

    /// Named style from config, `fallback` when unset
    pub fn style(&self, key: &str, fallback: Style) -> Style {
        self.state.config.config.styles.get_or(key, fallback)
    }

    pub fn status_message(&self) -> Option<&'a str> {
        self.state.system.status_message.as_deref()
    }

    pub fn handle_topic_click(&self, topic: &str) -> Msg {
        Msg::Nav(NavMsg::OpenTopic(topic.to_string()))
    }

    pub fn handle_article_click(&self, title: &str) -> Msg {
        Msg::Nav(NavMsg::OpenArticle(title.to_string()))
    }

    pub fn handle_pro_feature_click(&self) -> Msg {
        Msg::Nav(NavMsg::ShowUpgradeDialog)
    }

    pub fn go_home(&self) -> Msg {
        Msg::Nav(NavMsg::ShowHome)
    }

    pub fn close_dialog(&self) -> Msg {
        Msg::Nav(NavMsg::CloseDialog)
    }

    /// Account and Settings are Pro features; Logout leaves the session view.
    pub fn handle_user_menu(&self, item: UserMenuItem) -> Msg {
        match item {
            UserMenuItem::Account | UserMenuItem::Settings => self.handle_pro_feature_click(),
            UserMenuItem::Logout => Msg::Nav(NavMsg::Logout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_actions_produce_messages() {
        let state = AppState::default();
        let ctx = DashboardContext::new(&state);

        assert_eq!(
            ctx.handle_topic_click("Nanotechnology Applications"),
            Msg::Nav(NavMsg::OpenTopic("Nanotechnology Applications".into()))
        );
        assert_eq!(ctx.handle_pro_feature_click(), Msg::Nav(NavMsg::ShowUpgradeDialog));
        assert_eq!(ctx.go_home(), Msg::Nav(NavMsg::ShowHome));
        assert_eq!(
            ctx.handle_user_menu(UserMenuItem::Settings),
            Msg::Nav(NavMsg::ShowUpgradeDialog)
        );
        assert_eq!(
            ctx.handle_user_menu(UserMenuItem::Logout),
            Msg::Nav(NavMsg::Logout)
        );
    }

    #[test]
    fn test_accessors_follow_state() {
        let mut state = AppState::default();
        state.nav.update(NavMsg::OpenTopic("Quantum Computing Advancements".into()));
        let ctx = DashboardContext::new(&state);

        assert_eq!(ctx.current_page(), Page::Topic);
        assert_eq!(ctx.current_topic(), "Quantum Computing Advancements");
        assert_eq!(ctx.current_article(), "Dolor Sit Amet");
        assert_eq!(ctx.panes().pane_count(), 3);
        assert!(ctx.is_focused(Pane::Article));
        assert_eq!(ctx.profile().name, "BigHank9000");
    }
}
