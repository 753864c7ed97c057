//! Reusable widgets
//!
//! Stateless `Widget` implementations shared by the components.

pub mod divider;
pub mod knowledge_graph;
pub mod timeline;
pub mod world_map;
