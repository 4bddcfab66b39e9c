//! # newcoug - a terminal student portal
//!
//! Sign up or log in, then browse upcoming events for your major, your course
//! history and the catalog, ask for course recommendations and chat with the
//! advising assistant. Everything is fetched from a REST backend.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects (HTTP requests, terminal resize, logging)
//! - **View** (`presentation::components`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use newcoug::{
//!     core::{msg::{auth::AuthMsg, Msg}, update::update},
//!     AppState,
//! };
//!
//! let state = AppState::default();
//!
//! // Submitting an empty form issues no request and raises an alert
//! let (state, commands) = update(Msg::Auth(AuthMsg::Submit), state);
//!
//! assert!(commands.is_empty());
//! assert_eq!(state.auth().and_then(|auth| auth.alert()), Some("Enter your username"));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and commands
//! - [`domain`] - students, events, courses and text helpers
//! - [`infrastructure`] - terminal, CLI, configuration and the REST client
//! - [`integration`] - the runtime and the main loop
//! - [`presentation`] - components, widgets, styles and keybindings

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
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
