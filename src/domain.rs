//! Domain logic
//!
//! This module contains the records the portal passes around and the
//! small amount of logic that belongs to them:
//! - Students, campus events and courses as delivered by the backend
//! - Course status filtering
//! - The major list used by the sign-up form
//! - Text processing utilities

pub mod chat;
pub mod course;
pub mod event;
pub mod loadable;
pub mod majors;
pub mod student;
pub mod text;
pub mod wire;
