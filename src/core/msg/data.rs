use serde::{Deserialize, Serialize};

use crate::domain::{browser::FilterEntry, files::SortColumn};

/// Messages specific to DataState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataMsg {
    SortBy(SortColumn),
    UpdateFilter(String),
    CursorUp,
    CursorDown,
    ToggleSelected,
    ToggleSelectAll,
    DeleteSelected,
    Upload,

    // Contributor / folder / file browser
    /// Switch between the table and the browser
    ToggleView,
    BrowserOpen,
    BrowserBack,
    ToggleChecked,
    OpenFilterMenu,
    CloseFilterMenu,
    /// Move the filter menu highlight (`true` = down)
    MoveFilterMenu(bool),
    ToggleFilter(FilterEntry),
}
