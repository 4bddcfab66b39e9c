//! Integration layer
//!
//! Wires the pure core to the outside world:
//! - `Runtime`: message queues, update cycle and command execution
//! - `AppRunner`: the main loop over terminal events, API replies and rendering

pub mod app_runner;
pub mod runtime;
