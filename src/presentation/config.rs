//! UI configuration: key bindings and the named style table.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
