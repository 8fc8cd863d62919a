//! Action enum definitions for the TUI event loop.
//!
//! Actions represent user input, timer ticks and the result of the background
//! submission task. The app state machine in `App` consumes them one at a time.

use contact_client::SubmissionOutcome;
use crossterm::event::{KeyEvent, MouseEvent};

use crate::form::FormEvent;

#[derive(Debug, Clone)]
pub enum Action {
    /// Raw keyboard input, decoded by `App::handle_input`.
    Input(KeyEvent),
    /// Raw mouse input, decoded by `App::handle_mouse`.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Periodic timer for status expiry and animations.
    Tick,
    Quit,
    /// A decoded form event.
    Form(FormEvent),
    /// The background submission task finished.
    SubmissionFinished(SubmissionOutcome),
}
