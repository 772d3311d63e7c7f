use std::io;

use crossterm::event;

use crate::tui::event::TuiEvent;

/// Event loop state management.
///
/// Renders once after every state change and otherwise blocks on terminal
/// events. The screens here are static between key presses, so there is no
/// tick machinery.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl EventLoop {
    /// Creates a new `EventLoop`.
    pub(super) fn new() -> Self {
        // Initial render is required on startup
        Self { dirty: true }
    }

    /// Returns the next event.
    ///
    /// Emits `Render` once after any state change, then blocks until the
    /// next crossterm event.
    pub(super) fn next(&mut self) -> io::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }

        let event = event::read()?;
        self.dirty = true;
        Ok(event.into())
    }
}
