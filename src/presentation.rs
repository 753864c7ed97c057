//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Stateless components for every dashboard region
//! - The `DashboardContext` contract handed to each view
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod context;
pub mod widgets;
