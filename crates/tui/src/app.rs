//! Application state for the contact form TUI.
//!
//! Responsibilities:
//! - Hold the form controller, keyboard focus, scroll offset and last frame size.
//! - Translate key and mouse input into [`Action`]s (see `input`, `mouse`).
//! - Apply actions to state (see `actions`) and draw it (see `render`).
//!
//! Does NOT handle:
//! - Running the HTTP submission (see `runtime::side_effects`).
//! - Terminal setup and the event loop (see `main.rs`).

mod actions;
mod input;
mod mouse;
mod render;

use std::time::Duration;

use contact_config::{Config, DeliveryMode};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::focus::{FocusRing, FocusTarget};
use crate::form::{ContactFormController, FormEvent};
use crate::ui::layout::{self, form_viewport};
use crate::ui::modal::ModalController;
use crate::ui::theme::Theme;

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    pub form: ContactFormController,
    pub focus: FocusRing,
    /// Rows of the form scrolled above the viewport.
    pub scroll: u16,
    /// Frame size seen by the last render, used for mouse hit-testing.
    pub last_area: Rect,
    pub theme: Theme,
    pub spinner_frame: u8,
    pub should_quit: bool,
}

impl App {
    pub fn new(mode: DeliveryMode, status_ttl: Duration) -> Self {
        Self {
            form: ContactFormController::new(mode, ModalController::default(), status_ttl),
            focus: FocusRing::default(),
            scroll: 0,
            last_area: Rect::default(),
            theme: Theme::default(),
            spinner_frame: 0,
            should_quit: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.delivery_mode, config.status_ttl)
    }

    /// Move focus to `target`, producing a blur for the field that lost it.
    pub(crate) fn focus_on(&mut self, target: FocusTarget) -> Option<Action> {
        let previous = self.focus.set_focus(target)?;
        self.scroll_into_view(target);
        Self::blur(previous)
    }

    pub(crate) fn focus_next(&mut self) -> Option<Action> {
        let previous = self.focus.next();
        self.scroll_into_view(self.focus.current());
        Self::blur(previous)
    }

    pub(crate) fn focus_prev(&mut self) -> Option<Action> {
        let previous = self.focus.prev();
        self.scroll_into_view(self.focus.current());
        Self::blur(previous)
    }

    fn blur(previous: FocusTarget) -> Option<Action> {
        previous.field().map(|id| Action::Form(FormEvent::Blur(id)))
    }

    /// Adjust the scroll offset so `target` is fully visible.
    pub fn scroll_into_view(&mut self, target: FocusTarget) {
        let (top, height) = layout::span_of(target);
        self.scroll_span_into_view(top, height);
    }

    /// Adjust the scroll offset so the inline status line is fully visible.
    pub fn scroll_status_into_view(&mut self) {
        let (top, height) = layout::status_span();
        self.scroll_span_into_view(top, height);
    }

    fn scroll_span_into_view(&mut self, top: u16, height: u16) {
        let viewport = form_viewport(self.last_area).height;
        if viewport == 0 {
            return;
        }
        if top < self.scroll {
            self.scroll = top;
        } else if top + height > self.scroll + viewport {
            self.scroll = (top + height).saturating_sub(viewport);
        }
        self.clamp_scroll();
    }

    pub(crate) fn scroll_by(&mut self, delta: i32) {
        if self.form.modal().scroll_locked() {
            return;
        }
        let next = (i32::from(self.scroll) + delta).max(0);
        self.scroll = u16::try_from(next).unwrap_or(u16::MAX);
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self
            .scroll
            .min(layout::max_scroll(form_viewport(self.last_area).height));
    }
}
