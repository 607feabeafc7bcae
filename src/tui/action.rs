//! Actions returned by screen event handlers.

use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::model::Payload;

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to run side effects and navigate between
/// screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Hand a validated payload to the submit handler.
    Submit(Payload),
    /// Quit the application.
    Quit,
}

/// Common behavior for all screen state types.
pub trait ScreenState {
    /// Process a key event and return an [`Action`] for the `App` to apply.
    fn handle_key(&mut self, key: KeyEvent) -> Action;

    /// Advance any timers the screen owns.
    fn tick(&mut self, _now: Instant) {}
}
