//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real crossterm terminal and headless test terminal)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;
