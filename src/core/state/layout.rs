use crate::{
    core::{cmd::Cmd, msg::layout::LayoutMsg, state::nav::Page},
    domain::layout::{PaneLayout, PaneLayoutError},
    infrastructure::config::LayoutConfig,
};

/// Pane rows of both pages. Widths live here and nowhere else.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub home: PaneLayout,
    pub topic: PaneLayout,
    /// Keyboard resize step, in percent
    pub resize_step: f64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::from_config(&LayoutConfig::default()).expect("built-in pane layout is valid")
    }
}

impl LayoutState {
    pub fn from_config(config: &LayoutConfig) -> Result<Self, PaneLayoutError> {
        Ok(Self {
            home: config.home.build()?,
            topic: config.topic.build()?,
            resize_step: config.resize_step,
        })
    }

    pub fn row(&self, page: Page) -> &PaneLayout {
        match page {
            Page::Home => &self.home,
            Page::Topic => &self.topic,
        }
    }

    fn row_mut(&mut self, page: Page) -> &mut PaneLayout {
        match page {
            Page::Home => &mut self.home,
            Page::Topic => &mut self.topic,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.home.is_dragging() || self.topic.is_dragging()
    }

    pub fn end_all_drags(&mut self) {
        self.home.end_drag();
        self.topic.end_drag();
    }

    /// Layout-specific update function
    /// Drag messages apply to the row of `page`.
    pub fn update(&mut self, msg: LayoutMsg, page: Page) -> Vec<Cmd> {
        let step = self.resize_step;
        let row = self.row_mut(page);
        let changed = match msg {
            LayoutMsg::BeginDrag { divider } => {
                row.begin_drag(divider);
                false
            }
            LayoutMsg::UpdateDrag {
                pointer_x,
                container_width,
            } => row.update_drag(pointer_x, container_width),
            LayoutMsg::EndDrag => {
                row.end_drag();
                false
            }
            LayoutMsg::ResizePane { pane, grow } => {
                // The last pane only has a divider on its left
                let last = row.pane_count() - 1;
                let (divider, delta) = match (pane < last, grow) {
                    (true, true) => (pane, step),
                    (true, false) => (pane, -step),
                    (false, true) => (pane.saturating_sub(1), -step),
                    (false, false) => (pane.saturating_sub(1), step),
                };
                row.nudge_divider(divider, delta)
            }
        };

        if changed {
            vec![Cmd::RequestRender]
        } else {
            vec![]
        }
    }
}
