pub mod real;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

pub type Frame<'a> = ratatui::Frame<'a>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    Closed,
    Tick,
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

/// The terminal as seen by the app runner.
///
/// `RealTui` drives crossterm; `TestTui` renders into a ratatui `TestBackend`
/// and replays a scripted event queue.
pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: ratatui::prelude::Rect) -> Result<()>;
    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>>;

    /// Hands the terminal back to the shell until the process is resumed
    fn suspend(&mut self) -> Result<()> {
        self.exit()
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()
    }
}
