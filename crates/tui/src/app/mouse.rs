//! Mouse event handling.
//!
//! Responsibilities:
//! - Route clicks to the modal while it is open (backdrop / close button).
//! - Focus the clicked field; a click on the submit button submits.
//! - Scroll the form with the wheel unless the modal locks scrolling.
//!
//! Does NOT handle:
//! - Keyboard input (see input.rs).

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;
use crate::focus::FocusTarget;
use crate::form::FormEvent;
use crate::ui::layout::{FormLayout, form_viewport};
use crate::ui::modal::ModalClick;

const WHEEL_STEP: i32 = 3;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match mouse.kind {
            MouseEventKind::ScrollUp => {
                self.scroll_by(-WHEEL_STEP);
                None
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(WHEEL_STEP);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => None,
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) -> Option<Action> {
        match self.form.modal().hit_test(column, row) {
            ModalClick::Closed(trigger) => return Some(Action::Form(FormEvent::CloseModal(trigger))),
            ModalClick::Inside => return None,
            ModalClick::NotHandled => {}
        }
        // Clicks that land during the exit animation are swallowed.
        if self.form.modal().is_visible() {
            return None;
        }

        let layout = FormLayout::calculate(form_viewport(self.last_area), self.scroll);
        match layout.target_at(column, row)? {
            FocusTarget::Submit => {
                // The submit validates every field, so the blur is not needed.
                self.focus.set_focus(FocusTarget::Submit);
                Some(Action::Form(FormEvent::Submit))
            }
            target => self.focus_on(target),
        }
    }
}
