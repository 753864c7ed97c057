use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{
    core::{cmd::Cmd, msg::nav::NavMsg},
    domain::{
        article::{find_article, Link, DEFAULT_ARTICLE},
        topic::{search_topics, MENU_TOPIC_COUNT},
    },
};

/// Top-level page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Page {
    #[default]
    Home,
    Topic,
}

/// Panes that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Pane {
    #[default]
    Topics,
    Actions,
    Chat,
    Article,
    Analysis,
}

const HOME_PANES: [Pane; 2] = [Pane::Topics, Pane::Actions];
const TOPIC_PANES: [Pane; 3] = [Pane::Chat, Pane::Article, Pane::Analysis];

impl Page {
    /// Panes of this page, left to right
    pub fn panes(&self) -> &'static [Pane] {
        match self {
            Page::Home => &HOME_PANES,
            Page::Topic => &TOPIC_PANES,
        }
    }
}

impl Pane {
    pub fn page(&self) -> Page {
        match self {
            Pane::Topics | Pane::Actions => Page::Home,
            Pane::Chat | Pane::Article | Pane::Analysis => Page::Topic,
        }
    }

    /// Position of the pane in its page's row
    pub fn index(&self) -> usize {
        self.page()
            .panes()
            .iter()
            .position(|pane| pane == self)
            .unwrap_or(0)
    }
}

/// Single-line text inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputTarget {
    Chat,
    TopicSearch,
    FileFilter,
}

/// High-level UI mode for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UiMode {
    #[default]
    Normal,
    Insert(InputTarget),
}

/// Buttons on the home page action pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum HomeAction {
    #[strum(to_string = "Upload Data")]
    UploadData,
    #[strum(to_string = "Create Topic")]
    CreateTopic,
    #[strum(to_string = "Upgrade to Pro")]
    UpgradeToPro,
}

/// Entries of the header user menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum UserMenuItem {
    Account,
    Settings,
    Logout,
}

/// Navigation-related state: page, selection, focus and overlays
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub page: Page,
    pub current_topic: String,
    pub current_article: String,
    pub focus: Pane,
    pub mode: UiMode,
    pub show_upgrade_dialog: bool,
    /// Highlighted entry while the header topic menu is open
    pub topic_menu: Option<usize>,
    /// Highlighted entry while the header user menu is open
    pub user_menu: Option<usize>,
    pub topic_search: String,
    pub topic_cursor: usize,
    pub action_cursor: usize,
    pub selected_link: Option<usize>,
}

impl NavState {
    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        match msg {
            NavMsg::ShowHome => {
                self.page = Page::Home;
                self.focus = Pane::Topics;
                self.mode = UiMode::Normal;
                self.close_menus();
            }
            NavMsg::OpenTopic(topic) => {
                log::info!("opening topic {topic}");
                self.page = Page::Topic;
                self.current_topic = topic;
                self.current_article = DEFAULT_ARTICLE.to_string();
                self.selected_link = None;
                self.focus = Pane::Article;
                self.mode = UiMode::Normal;
                self.close_menus();
            }
            NavMsg::OpenArticle(title) => {
                self.current_article = title;
                self.selected_link = None;
            }
            NavMsg::ShowUpgradeDialog => {
                self.show_upgrade_dialog = true;
                self.close_menus();
            }
            NavMsg::CloseDialog => self.show_upgrade_dialog = false,
            NavMsg::FocusNext => self.cycle_focus(true),
            NavMsg::FocusPrev => self.cycle_focus(false),
            NavMsg::FocusPane(pane) => {
                if pane.page() == self.page {
                    self.focus = pane;
                }
            }
            NavMsg::OpenTopicMenu => {
                self.user_menu = None;
                self.topic_menu = Some(0);
            }
            NavMsg::CloseTopicMenu => self.topic_menu = None,
            NavMsg::MoveTopicMenu(forward) => {
                if let Some(index) = self.topic_menu {
                    self.topic_menu = Some(step(index, MENU_TOPIC_COUNT, forward));
                }
            }
            NavMsg::OpenUserMenu => {
                self.topic_menu = None;
                self.user_menu = Some(0);
            }
            NavMsg::CloseUserMenu => self.user_menu = None,
            NavMsg::MoveUserMenu(forward) => {
                if let Some(index) = self.user_menu {
                    self.user_menu = Some(step(index, UserMenuItem::iter().count(), forward));
                }
            }
            NavMsg::Logout => {
                log::info!("logging out");
                *self = Self::default();
            }
            NavMsg::CursorUp => self.move_cursor(false),
            NavMsg::CursorDown => self.move_cursor(true),
            NavMsg::EnterInsert(target) => self.mode = UiMode::Insert(target),
            NavMsg::LeaveInsert => self.mode = UiMode::Normal,
            NavMsg::UpdateTopicSearch(query) => {
                self.topic_search = query;
                let count = self.visible_topics().len();
                self.topic_cursor = self.topic_cursor.min(count.saturating_sub(1));
            }
        }
        vec![]
    }

    fn close_menus(&mut self) {
        self.topic_menu = None;
        self.user_menu = None;
    }

    fn cycle_focus(&mut self, forward: bool) {
        let panes = self.page.panes();
        let current = panes.iter().position(|p| *p == self.focus).unwrap_or(0);
        self.focus = panes[step(current, panes.len(), forward)];
    }

    fn move_cursor(&mut self, forward: bool) {
        match self.focus {
            Pane::Topics => {
                let count = self.visible_topics().len();
                if count > 0 {
                    self.topic_cursor = step(self.topic_cursor.min(count - 1), count, forward);
                }
            }
            Pane::Actions => {
                self.action_cursor = step(self.action_cursor, HomeAction::iter().count(), forward);
            }
            Pane::Article => {
                let count = self.current_links().len();
                if count == 0 {
                    self.selected_link = None;
                    return;
                }
                self.selected_link = Some(match self.selected_link {
                    None if forward => 0,
                    None => count - 1,
                    Some(index) => step(index.min(count - 1), count, forward),
                });
            }
            Pane::Chat | Pane::Analysis => {}
        }
    }

    pub fn is_home(&self) -> bool {
        self.page == Page::Home
    }

    pub fn is_inserting(&self, target: InputTarget) -> bool {
        self.mode == UiMode::Insert(target)
    }

    /// Home page topics matching the search field, with their rank
    pub fn visible_topics(&self) -> Vec<(usize, &'static str)> {
        search_topics(&self.topic_search)
    }

    pub fn highlighted_topic(&self) -> Option<&'static str> {
        self.visible_topics()
            .get(self.topic_cursor)
            .map(|(_, topic)| *topic)
    }

    pub fn highlighted_user_item(&self) -> Option<UserMenuItem> {
        self.user_menu
            .and_then(|index| UserMenuItem::iter().nth(index))
    }

    pub fn highlighted_action(&self) -> Option<HomeAction> {
        HomeAction::iter().nth(self.action_cursor)
    }

    pub fn current_links(&self) -> Vec<Link> {
        find_article(&self.current_article)
            .map(|article| article.links())
            .unwrap_or_default()
    }

    pub fn selected_link(&self) -> Option<Link> {
        self.selected_link
            .and_then(|index| self.current_links().into_iter().nth(index))
    }
}

/// Next index in a ring of `len` entries
fn step(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_topic_resets_article() {
        let mut nav = NavState {
            current_article: "Eiusmod Tempor Incididunt".into(),
            selected_link: Some(3),
            ..Default::default()
        };

        let cmds = nav.update(NavMsg::OpenTopic("Nanotechnology Applications".into()));

        assert!(cmds.is_empty());
        assert_eq!(nav.page, Page::Topic);
        assert_eq!(nav.current_topic, "Nanotechnology Applications");
        assert_eq!(nav.current_article, DEFAULT_ARTICLE);
        assert_eq!(nav.selected_link, None);
        assert_eq!(nav.focus, Pane::Article);
    }

    #[test]
    fn test_focus_cycles_within_page() {
        let mut nav = NavState::default();
        nav.update(NavMsg::FocusNext);
        assert_eq!(nav.focus, Pane::Actions);
        nav.update(NavMsg::FocusNext);
        assert_eq!(nav.focus, Pane::Topics);

        nav.update(NavMsg::OpenTopic("t".into()));
        nav.update(NavMsg::FocusPrev);
        assert_eq!(nav.focus, Pane::Chat);
        nav.update(NavMsg::FocusPrev);
        assert_eq!(nav.focus, Pane::Analysis);

        // Panes of another page are ignored
        nav.update(NavMsg::FocusPane(Pane::Topics));
        assert_eq!(nav.focus, Pane::Analysis);
    }

    #[test]
    fn test_link_cursor_wraps() {
        let mut nav = NavState::default();
        nav.update(NavMsg::OpenTopic("t".into()));
        let count = nav.current_links().len();

        nav.update(NavMsg::CursorUp);
        assert_eq!(nav.selected_link, Some(count - 1));
        nav.update(NavMsg::CursorDown);
        assert_eq!(nav.selected_link, Some(0));
        assert_eq!(
            nav.selected_link(),
            Some(Link::Article("Eiusmod Tempor Incididunt".into()))
        );
    }

    #[test]
    fn test_unknown_article_has_no_links() {
        let mut nav = NavState {
            page: Page::Topic,
            focus: Pane::Article,
            current_article: "Missing".into(),
            ..Default::default()
        };
        nav.update(NavMsg::CursorDown);
        assert_eq!(nav.selected_link, None);
    }

    #[test]
    fn test_topic_search_clamps_cursor() {
        let mut nav = NavState {
            topic_cursor: 8,
            ..Default::default()
        };
        nav.update(NavMsg::UpdateTopicSearch("tech".into()));
        assert_eq!(
            nav.visible_topics(),
            vec![
                (5, "Sustainable Energy Technologies"),
                (9, "Nanotechnology Applications")
            ]
        );
        assert_eq!(nav.topic_cursor, 1);
        assert_eq!(nav.highlighted_topic(), Some("Nanotechnology Applications"));
    }

    #[test]
    fn test_topic_menu_navigation() {
        let mut nav = NavState::default();
        nav.update(NavMsg::MoveTopicMenu(true));
        assert_eq!(nav.topic_menu, None);

        nav.update(NavMsg::OpenTopicMenu);
        nav.update(NavMsg::MoveTopicMenu(false));
        assert_eq!(nav.topic_menu, Some(MENU_TOPIC_COUNT - 1));
        nav.update(NavMsg::CloseTopicMenu);
        assert_eq!(nav.topic_menu, None);
    }

    #[test]
    fn test_user_menu_replaces_topic_menu() {
        let mut nav = NavState::default();
        nav.update(NavMsg::OpenTopicMenu);
        nav.update(NavMsg::OpenUserMenu);
        assert_eq!(nav.topic_menu, None);
        assert_eq!(nav.highlighted_user_item(), Some(UserMenuItem::Account));

        nav.update(NavMsg::MoveUserMenu(false));
        assert_eq!(nav.highlighted_user_item(), Some(UserMenuItem::Logout));

        nav.update(NavMsg::ShowUpgradeDialog);
        assert!(nav.show_upgrade_dialog);
        assert_eq!(nav.user_menu, None);
    }

    #[test]
    fn test_logout_returns_to_a_fresh_home_page() {
        let mut nav = NavState::default();
        nav.update(NavMsg::OpenTopic("Space".into()));
        nav.update(NavMsg::OpenUserMenu);

        nav.update(NavMsg::Logout);

        assert_eq!(nav.page, Page::Home);
        assert_eq!(nav.current_topic, "");
        assert_eq!(nav.user_menu, None);
        assert_eq!(nav.focus, Pane::Topics);
    }

    #[test]
    fn test_pane_indices() {
        assert_eq!(Pane::Topics.index(), 0);
        assert_eq!(Pane::Actions.index(), 1);
        assert_eq!(Pane::Analysis.index(), 2);
        assert_eq!(Pane::Chat.page(), Page::Topic);
    }
}
