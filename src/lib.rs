//! # Gnosi - terminal research dashboard
//!
//! A topic browser, agent chat, cross-linked article viewer and analysis
//! tabs, laid out in resizable panes and built with Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state, including the pane widths
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (timers, terminal control, logging)
//! - **View** (`presentation::components`): rendering through a `DashboardContext`
//!
//! ## Example Usage
//!
//! ```rust
//! use gnosi::core::{
//!     msg::{layout::LayoutMsg, nav::NavMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//!
//! let state = AppState::default();
//! let topic = "Nanotechnology Applications".to_string();
//! let (state, _) = update(Msg::Nav(NavMsg::OpenTopic(topic)), state);
//! let (state, _) = update(Msg::Layout(LayoutMsg::BeginDrag { divider: 0 }), state);
//! let (state, _) = update(
//!     Msg::Layout(LayoutMsg::UpdateDrag { pointer_x: 35.0, container_width: 100.0 }),
//!     state,
//! );
//!
//! assert_eq!(state.layout.topic.widths(), &[35.0, 40.0, 25.0]);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - Elm core: state, messages, update, commands
//! - [`domain`] - Pane layout manager and sample data
//! - [`infrastructure`] - Terminal, configuration and CLI
//! - [`integration`] - Runtime and event loop
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling and paths

#![allow(dead_code)]

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use domain::layout::{PaneBounds, PaneLayout, PaneLayoutError};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
