//! Runtime wiring
//!
//! This module connects the pure Elm core to the terminal:
//! - `Runtime` owns state and message queues
//! - `AppRunner` drives the event loop
//! - `Renderer` draws the current state
//! - `Coalescer` decides when resizes and renders happen

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
