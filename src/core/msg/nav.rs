use serde::{Deserialize, Serialize};

use crate::core::state::nav::{InputTarget, Pane};

/// Messages specific to NavState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NavMsg {
    // Pages
    ShowHome,
    OpenTopic(String),
    OpenArticle(String),

    // Overlays
    ShowUpgradeDialog,
    CloseDialog,
    OpenTopicMenu,
    CloseTopicMenu,
    /// Move the topic menu highlight (`true` = down)
    MoveTopicMenu(bool),
    OpenUserMenu,
    CloseUserMenu,
    /// Move the user menu highlight (`true` = down)
    MoveUserMenu(bool),
    /// Back to the home page with the session view cleared
    Logout,

    // Focus and cursors
    FocusNext,
    FocusPrev,
    FocusPane(Pane),
    CursorUp,
    CursorDown,

    // Text input
    EnterInsert(InputTarget),
    LeaveInsert,
    UpdateTopicSearch(String),
}
