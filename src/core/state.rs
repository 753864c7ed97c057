use color_eyre::eyre::Result;

pub mod analysis;
pub mod chat;
pub mod data;
pub mod layout;
pub mod nav;
pub mod system;

use crate::infrastructure::config::Config;
use analysis::AnalysisState;
use chat::ChatState;
use data::DataState;
use layout::LayoutState;
use nav::NavState;
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub system: SystemState,
    pub nav: NavState,
    pub layout: LayoutState,
    pub chat: ChatState,
    pub analysis: AnalysisState,
    pub data: DataState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from a loaded config.
    /// Fails when the configured pane layout is invalid.
    pub fn new(config: Config) -> Result<Self> {
        let layout = LayoutState::from_config(&config.layout)?;
        let chat = ChatState::new(&config.agent);
        Ok(Self {
            layout,
            chat,
            config: ConfigState { config },
            ..Default::default()
        })
    }
}
