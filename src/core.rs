//! Dashboard core in the Elm style
//!
//! - `raw_msg` / `translator`: terminal input turned into intent
//! - `msg` / `state` / `update`: intent applied to the application state
//! - `cmd` / `cmd_executor`: side effects requested by `update`

pub mod cmd;
pub mod cmd_executor;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
