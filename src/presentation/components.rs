//! Component collection
//!
//! Components are stateless renderers. The root builds one
//! `DashboardContext` per frame and hands it down to every view.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::context::DashboardContext};

pub mod agent_chat;
pub mod analysis_panel;
pub mod article_viewer;
pub mod dashboard;
pub mod data_panel;
pub mod dialog;
pub mod header;
pub mod status_bar;
pub mod topic_selector;

pub use dashboard::DashboardComponent;

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    pub dashboard: DashboardComponent,
}

impl Components {
    /// Create a new component collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let ctx = DashboardContext::new(state);
        self.dashboard.view(&ctx, frame, area);
    }
}
