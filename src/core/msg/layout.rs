use serde::{Deserialize, Serialize};

/// Messages specific to LayoutState. They act on the row of the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutMsg {
    BeginDrag {
        divider: usize,
    },
    /// Pointer position and container width, both in terminal columns
    UpdateDrag {
        pointer_x: f64,
        container_width: f64,
    },
    EndDrag,
    /// Keyboard resize of a single pane
    ResizePane {
        pane: usize,
        grow: bool,
    },
}

impl LayoutMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, LayoutMsg::UpdateDrag { .. })
    }
}
