//! Domain logic
//!
//! This module contains the dashboard's data and pure logic:
//! - Resizable pane rows
//! - Topic, article and source catalogues
//! - Sample data behind the analysis views, plus the file browser
//! - Text measuring helpers

pub mod article;
pub mod browser;
pub mod chronology;
pub mod files;
pub mod geo;
pub mod graph;
pub mod layout;
pub mod text;
pub mod topic;
