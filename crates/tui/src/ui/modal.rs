//! Success modal state: visibility, entrance/exit animation, scroll lock and
//! click hit-testing.
//!
//! The renderer records where the content box and close button were drawn;
//! clicks are then resolved against those rects. Every close path funnels
//! through [`ModalController::close`], which is a no-op unless the modal is
//! open.

use std::time::{Duration, Instant};

use contact_config::constants::MODAL_ANIMATION_MS;
use ratatui::layout::{Position, Rect};

use crate::form::events::ModalCloseTrigger;

/// Lifecycle of the modal overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    Closed,
    Opening { started: Instant },
    Open,
    Closing { started: Instant },
}

/// What a click did while the modal was showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    /// The modal was not open; the click belongs to the form.
    NotHandled,
    /// Inside the content box, nothing happens.
    Inside,
    /// The click closed the modal.
    Closed(ModalCloseTrigger),
}

#[derive(Debug, Clone)]
pub struct ModalController {
    phase: ModalPhase,
    animation: Duration,
    content_area: Option<Rect>,
    close_button_area: Option<Rect>,
}

impl Default for ModalController {
    fn default() -> Self {
        Self::new(Duration::from_millis(MODAL_ANIMATION_MS))
    }
}

impl ModalController {
    pub fn new(animation: Duration) -> Self {
        Self {
            phase: ModalPhase::Closed,
            animation,
            content_area: None,
            close_button_area: None,
        }
    }

    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Open (or re-open) the modal and start the entrance animation.
    pub fn open(&mut self, now: Instant) {
        if !self.is_open() {
            self.phase = ModalPhase::Opening { started: now };
        }
    }

    /// Close the modal and start the exit animation.
    ///
    /// Returns false when the modal was already closed or closing.
    pub fn close(&mut self, now: Instant) -> bool {
        if !self.is_open() {
            return false;
        }
        self.phase = ModalPhase::Closing { started: now };
        self.content_area = None;
        self.close_button_area = None;
        true
    }

    /// True while opening or fully open. A closing modal no longer accepts input.
    pub fn is_open(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening { .. } | ModalPhase::Open)
    }

    /// True whenever something must be drawn, including the exit animation.
    pub fn is_visible(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    /// The form cannot scroll while the modal is open.
    pub fn scroll_locked(&self) -> bool {
        self.is_open()
    }

    /// Visibility from 0.0 (hidden) to 1.0 (fully shown) at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase {
            ModalPhase::Closed => 0.0,
            ModalPhase::Open => 1.0,
            ModalPhase::Opening { started } => self.fraction(started, now),
            ModalPhase::Closing { started } => 1.0 - self.fraction(started, now),
        }
    }

    fn fraction(&self, started: Instant, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(started);
        if elapsed >= self.animation || self.animation.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.animation.as_secs_f32()
        }
    }

    /// Settle finished animations. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            ModalPhase::Opening { started } if self.fraction(started, now) >= 1.0 => {
                self.phase = ModalPhase::Open;
                true
            }
            ModalPhase::Closing { started } if self.fraction(started, now) >= 1.0 => {
                self.phase = ModalPhase::Closed;
                true
            }
            _ => false,
        }
    }

    /// Record where the content box and close button were last drawn.
    pub fn set_areas(&mut self, content: Rect, close_button: Rect) {
        self.content_area = Some(content);
        self.close_button_area = Some(close_button);
    }

    pub fn content_area(&self) -> Option<Rect> {
        self.content_area
    }

    pub fn close_button_area(&self) -> Option<Rect> {
        self.close_button_area
    }

    /// What a left click at (`column`, `row`) would do, without doing it.
    pub fn hit_test(&self, column: u16, row: u16) -> ModalClick {
        if !self.is_open() {
            return ModalClick::NotHandled;
        }
        let pos = Position::new(column, row);

        if self.close_button_area.is_some_and(|r| r.contains(pos)) {
            ModalClick::Closed(ModalCloseTrigger::Button)
        } else if self.content_area.is_some_and(|r| r.contains(pos)) {
            ModalClick::Inside
        } else {
            ModalClick::Closed(ModalCloseTrigger::Backdrop)
        }
    }
}
