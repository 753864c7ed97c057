use serde::{Deserialize, Serialize};

use crate::core::state::analysis::{AnalysisTab, MainTab};

/// Messages specific to AnalysisState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalysisMsg {
    NextTab,
    PrevTab,
    SelectTab(MainTab),
    NextSubTab,
    PrevSubTab,
    SelectSubTab(AnalysisTab),
    /// Jump to Analysis > Sources with source `n` highlighted
    ShowSource(u32),

    // Knowledge graph
    /// Move the node cursor (`true` = next node)
    MoveNodeCursor(bool),
    /// Event nodes open the timeline, place nodes the map
    ActivateNode,

    // World map
    ZoomIn,
    ZoomOut,
    ResetZoom,
    /// Centre the next or previous pinned city
    MoveMapFocus(bool),
}
