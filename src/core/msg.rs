use serde::{Deserialize, Serialize};

pub mod analysis;
pub mod chat;
pub mod data;
pub mod layout;
pub mod nav;
pub mod system;

use analysis::AnalysisMsg;
use chat::ChatMsg;
use data::DataMsg;
use layout::LayoutMsg;
use nav::NavMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never carry terminal events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Page, focus and overlays (delegated to NavState)
    Nav(NavMsg),

    // Pane widths (delegated to LayoutState)
    Layout(LayoutMsg),

    // Agent chat (delegated to ChatState)
    Chat(ChatMsg),

    // Analysis tabs (delegated to AnalysisState)
    Analysis(AnalysisMsg),

    // Data table (delegated to DataState)
    Data(DataMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(msg) => msg.is_frequent(),
            Msg::Layout(msg) => msg.is_frequent(),
            _ => false,
        }
    }
}
