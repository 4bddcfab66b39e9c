//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (real terminal and test backend)
//! - CLI argument processing
//! - Configuration loading
//! - The REST client and the background service that runs it

pub mod api;
pub mod api_service;
pub mod cli;
pub mod config;
pub mod tui;
