//! Keyboard input handling.
//!
//! Responsibilities:
//! - Map key presses to focus moves, field edits, submit and modal close.
//!
//! Does NOT handle:
//! - Validation or submission (returns `Action::Form` for the controller).
//! - Mouse input (see mouse.rs).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::focus::FocusTarget;
use crate::form::field::cycle_inquiry_type;
use crate::form::{FieldId, FormEvent, ModalCloseTrigger};

impl App {
    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        if self.form.modal().is_open() {
            return match key.code {
                KeyCode::Esc => Some(Action::Form(FormEvent::CloseModal(
                    ModalCloseTrigger::Escape,
                ))),
                KeyCode::Enter => Some(Action::Form(FormEvent::CloseModal(
                    ModalCloseTrigger::Button,
                ))),
                _ => None,
            };
        }

        if ctrl && key.code == KeyCode::Char('s') {
            return Some(Action::Form(FormEvent::Submit));
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.focus_prev(),
            KeyCode::PageDown => {
                self.scroll_by(5);
                None
            }
            KeyCode::PageUp => {
                self.scroll_by(-5);
                None
            }
            _ => match self.focus.current() {
                FocusTarget::Submit => self.handle_submit_key(key),
                FocusTarget::Field(FieldId::InquiryType) => self.handle_select_key(key),
                FocusTarget::Field(id) => self.handle_text_key(id, key),
            },
        }
    }

    fn handle_submit_key(&mut self, key: KeyEvent) -> Option<Action> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Form(FormEvent::Submit)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }

    fn handle_select_key(&mut self, key: KeyEvent) -> Option<Action> {
        let forward = match key.code {
            KeyCode::Right | KeyCode::Char(' ') => true,
            KeyCode::Left => false,
            _ => return None,
        };
        let value = cycle_inquiry_type(self.form.value(FieldId::InquiryType), forward);
        Some(Action::Form(FormEvent::Input {
            field: FieldId::InquiryType,
            value: value.to_string(),
        }))
    }

    fn handle_text_key(&mut self, field: FieldId, key: KeyEvent) -> Option<Action> {
        let mut value = self.form.value(field).to_string();
        match key.code {
            // Enter in a single-line input submits the form, as browsers do.
            KeyCode::Enter if !field.is_multiline() => return Some(Action::Form(FormEvent::Submit)),
            KeyCode::Enter => value.push('\n'),
            KeyCode::Backspace => {
                value.pop()?;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => value.push(c),
            _ => return None,
        }
        Some(Action::Form(FormEvent::Input { field, value }))
    }
}
