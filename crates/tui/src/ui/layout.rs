//! Form layout for rendering and mouse hit-testing.
//!
//! Responsibilities:
//! - Place the header, the five fields, the submit button and the status line
//!   inside a (possibly scrolled) viewport.
//! - Place the success modal and its close button.
//!
//! Does NOT handle:
//! - Drawing (see `ui::render`).
//! - Deciding what a click does (see `app`).
//!
//! Invariants:
//! - Rendering and hit-testing both go through [`FormLayout::calculate`], so a
//!   click lands on exactly what was drawn.
//! - A block is placed only when it fits entirely inside the viewport.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::focus::FocusTarget;
use crate::form::FieldId;

pub const MAX_FORM_WIDTH: u16 = 72;
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;
pub const SUBMIT_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 2;
const LABEL_HEIGHT: u16 = 1;
const ERROR_HEIGHT: u16 = 1;
const INPUT_HEIGHT: u16 = 3;
const TEXTAREA_HEIGHT: u16 = 6;

pub const MODAL_WIDTH_PERCENT: u16 = 60;
pub const MODAL_HEIGHT_PERCENT: u16 = 40;
pub const CLOSE_BUTTON_TEXT: &str = "[ Close ]";

fn input_height(id: FieldId) -> u16 {
    if id.is_multiline() {
        TEXTAREA_HEIGHT
    } else {
        INPUT_HEIGHT
    }
}

fn field_height(id: FieldId) -> u16 {
    LABEL_HEIGHT + input_height(id) + ERROR_HEIGHT
}

/// Height of the whole form when nothing is scrolled away.
pub fn content_height() -> u16 {
    HEADER_HEIGHT
        + FieldId::ALL.into_iter().map(field_height).sum::<u16>()
        + SUBMIT_HEIGHT
        + STATUS_HEIGHT
}

/// Unscrolled (top, height) of a focusable block.
pub fn span_of(target: FocusTarget) -> (u16, u16) {
    let mut top = HEADER_HEIGHT;
    for id in FieldId::ALL {
        if target == FocusTarget::Field(id) {
            return (top, field_height(id));
        }
        top += field_height(id);
    }
    (top, SUBMIT_HEIGHT)
}

/// Unscrolled (top, height) of the inline status line below the submit button.
pub fn status_span() -> (u16, u16) {
    let (submit_top, _) = span_of(FocusTarget::Submit);
    (submit_top + SUBMIT_HEIGHT, STATUS_HEIGHT)
}

/// Area left for the form once the footer hint line is taken.
pub fn form_viewport(area: Rect) -> Rect {
    Rect {
        height: area.height.saturating_sub(FOOTER_HEIGHT),
        ..area
    }
}

pub fn footer_area(area: Rect) -> Rect {
    Rect {
        y: area.bottom().saturating_sub(FOOTER_HEIGHT),
        height: area.height.min(FOOTER_HEIGHT),
        ..area
    }
}

/// Largest useful scroll offset for a viewport of `height` rows.
pub fn max_scroll(height: u16) -> u16 {
    content_height().saturating_sub(height)
}

/// Placed rects of one field. `None` means scrolled out of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub id: FieldId,
    pub label: Option<Rect>,
    pub input: Option<Rect>,
    pub error: Option<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub viewport: Rect,
    pub header: Option<Rect>,
    pub fields: Vec<FieldLayout>,
    pub submit: Option<Rect>,
    pub status: Option<Rect>,
}

struct Cursor {
    viewport: Rect,
    x: u16,
    width: u16,
    y: i32,
}

impl Cursor {
    fn place(&mut self, height: u16) -> Option<Rect> {
        let top = self.y;
        self.y += i32::from(height);
        let fits = top >= i32::from(self.viewport.y)
            && top + i32::from(height) <= i32::from(self.viewport.bottom());
        fits.then(|| Rect::new(self.x, top as u16, self.width, height))
    }
}

impl FormLayout {
    pub fn calculate(viewport: Rect, scroll: u16) -> Self {
        let width = viewport.width.min(MAX_FORM_WIDTH);
        let mut cursor = Cursor {
            viewport,
            x: viewport.x + (viewport.width - width) / 2,
            width,
            y: i32::from(viewport.y) - i32::from(scroll),
        };

        let header = cursor.place(HEADER_HEIGHT);
        let fields = FieldId::ALL
            .into_iter()
            .map(|id| FieldLayout {
                id,
                label: cursor.place(LABEL_HEIGHT),
                input: cursor.place(input_height(id)),
                error: cursor.place(ERROR_HEIGHT),
            })
            .collect();
        let submit = cursor.place(SUBMIT_HEIGHT);
        let status = cursor.place(STATUS_HEIGHT);

        Self {
            viewport,
            header,
            fields,
            submit,
            status,
        }
    }

    pub fn field(&self, id: FieldId) -> Option<&FieldLayout> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// The focusable element under (`column`, `row`), if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<FocusTarget> {
        let pos = Position::new(column, row);
        if self.submit.is_some_and(|r| r.contains(pos)) {
            return Some(FocusTarget::Submit);
        }
        self.fields
            .iter()
            .find(|f| {
                [f.label, f.input]
                    .into_iter()
                    .flatten()
                    .any(|r| r.contains(pos))
            })
            .map(|f| FocusTarget::Field(f.id))
    }
}

/// Helper function to create a centered rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Content box of the success modal and its close button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    pub content: Rect,
    pub close_button: Rect,
}

impl ModalLayout {
    pub fn calculate(area: Rect) -> Self {
        let content = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, area);
        let button_width = (CLOSE_BUTTON_TEXT.len() as u16).min(content.width);
        let close_button = Rect::new(
            content.x + (content.width - button_width) / 2,
            content.bottom().saturating_sub(2).max(content.y),
            button_width,
            content.height.min(1),
        );
        Self {
            content,
            close_button,
        }
    }
}
