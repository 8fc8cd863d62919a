//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Apply a single [`Action`] to application state.
//! - Hand a validated payload back to the caller so it can be delivered.
//!
//! Does NOT handle:
//! - Network I/O (the caller spawns the submission).

use std::time::Instant;

use contact_client::SubmissionPayload;
use ratatui::layout::Rect;

use crate::action::Action;
use crate::app::App;
use crate::form::SubmissionPhase;

impl App {
    /// Update application state based on an action.
    ///
    /// Returns the payload to deliver when the action started a submission.
    pub fn update(&mut self, action: Action) -> Option<SubmissionPayload> {
        let now = Instant::now();
        match action {
            Action::Input(key) => {
                let next = self.handle_input(key)?;
                self.update(next)
            }
            Action::Mouse(mouse) => {
                let next = self.handle_mouse(mouse)?;
                self.update(next)
            }
            Action::Resize(width, height) => {
                self.last_area = Rect::new(0, 0, width, height);
                self.scroll_into_view(self.focus.current());
                None
            }
            Action::Tick => {
                self.form.tick(now);
                if self.form.phase() == SubmissionPhase::Submitting {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
                None
            }
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Form(event) => {
                let payload = self.form.dispatch(event, now);
                self.reveal_status_shown_at(now);
                payload
            }
            Action::SubmissionFinished(outcome) => {
                self.form.finish_submit(&outcome, now);
                self.reveal_status_shown_at(now);
                None
            }
        }
    }

    /// Bring the status line on screen if it was set during this update.
    fn reveal_status_shown_at(&mut self, now: Instant) {
        if self
            .form
            .status()
            .current()
            .is_some_and(|status| status.shown_at == now)
        {
            self.scroll_status_into_view();
        }
    }
}
