//! Drawing of the contact form, the status line and the success modal.
//!
//! Responsibilities:
//! - Render every block placed by [`FormLayout`], including per-field errors.
//! - Render the modal over a dimmed backdrop and record its hit-test areas.
//!
//! Does NOT handle:
//! - Input, focus or scrolling decisions (see `app`).

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::App;
use crate::focus::FocusTarget;
use crate::form::FieldId;
use crate::form::controller::SUCCESS_MESSAGE;
use crate::ui::layout::{
    CLOSE_BUTTON_TEXT, FieldLayout, FormLayout, ModalLayout, footer_area, form_viewport,
};
use crate::ui::status::StatusLevel;
use crate::ui::theme::{Theme, spinner_char};

pub const FORM_TITLE: &str = "Contact Us";
pub const FORM_SUBTITLE: &str = "Fields marked * are required.";
pub const MODAL_TITLE: &str = "Inquiry Sent";

/// Render the whole screen for `app`.
pub fn render_app(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = app.theme;
    let layout = FormLayout::calculate(form_viewport(area), app.scroll);

    if let Some(header) = layout.header {
        let p = Paragraph::new(vec![
            Line::styled(FORM_TITLE, theme.title()),
            Line::styled(FORM_SUBTITLE, theme.text_dim()),
        ]);
        f.render_widget(p, header);
    }

    for field in &layout.fields {
        render_field(f, app, field, &theme);
    }

    if let Some(submit) = layout.submit {
        render_submit(f, app, submit, &theme);
    }

    if let Some(status_area) = layout.status
        && let Some(status) = app.form.status().current()
    {
        let style = match status.level {
            StatusLevel::Success => theme.success(),
            StatusLevel::Error => theme.error(),
        };
        let p = Paragraph::new(status.text.as_str())
            .style(style)
            .wrap(Wrap { trim: true });
        f.render_widget(p, status_area);
    }

    render_footer(f, app, footer_area(area), &theme);

    if app.form.modal().is_visible() {
        render_modal(f, app, area, &theme);
    }
}

fn render_field(f: &mut Frame, app: &App, layout: &FieldLayout, theme: &Theme) {
    let field = app.form.field(layout.id);
    let focused = app.focus.is_focused(FocusTarget::Field(layout.id));
    let modal_open = app.form.modal().is_visible();

    if let Some(label) = layout.label {
        let style = if focused { theme.title() } else { theme.text() };
        let line = Line::from(vec![
            Span::styled(layout.id.label(), style),
            Span::styled(" *", theme.error()),
        ]);
        f.render_widget(Paragraph::new(line), label);
    }

    if let Some(input) = layout.input {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.input_border(focused, field.is_flagged()));
        let inner = block.inner(input);
        f.render_widget(block, input);

        let value = field.value();
        if value.is_empty() {
            let p = Paragraph::new(layout.id.placeholder()).style(theme.text_dim());
            f.render_widget(p, inner);
        } else if layout.id == FieldId::InquiryType {
            let line = Line::from(vec![
                Span::styled("◀ ", theme.text_dim()),
                Span::styled(value, theme.text()),
                Span::styled(" ▶", theme.text_dim()),
            ]);
            f.render_widget(Paragraph::new(line), inner);
        } else {
            let lines = visible_lines(value, inner);
            let text: Vec<Line> = lines.iter().map(|l| Line::raw(l.as_str())).collect();
            f.render_widget(Paragraph::new(text).style(theme.text()), inner);
            if focused && !modal_open {
                let last = lines.last().map(|l| l.chars().count()).unwrap_or(0) as u16;
                let row = inner.y + (lines.len() as u16).saturating_sub(1);
                f.set_cursor_position((inner.x + last.min(inner.width.saturating_sub(1)), row));
            }
        }

        if focused && value.is_empty() && layout.id.is_text() && !modal_open {
            f.set_cursor_position((inner.x, inner.y));
        }
    }

    if let Some(error) = layout.error
        && field.is_flagged()
    {
        f.render_widget(Paragraph::new(field.error()).style(theme.error()), error);
    }
}

/// The tail of `value` that fits in `inner`: last lines, each trimmed to its
/// last `width - 1` characters so the cursor stays inside the box.
fn visible_lines(value: &str, inner: Rect) -> Vec<String> {
    let width = usize::from(inner.width.saturating_sub(1));
    let height = usize::from(inner.height.max(1));
    let lines: Vec<&str> = value.split('\n').collect();
    lines[lines.len().saturating_sub(height)..]
        .iter()
        .map(|line| {
            let count = line.chars().count();
            line.chars().skip(count.saturating_sub(width)).collect()
        })
        .collect()
}

fn render_submit(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let control = app.form.submit_control();
    let focused = app.focus.is_focused(FocusTarget::Submit);
    let label = if control.enabled {
        control.label.to_string()
    } else {
        format!("{} {}", spinner_char(app.spinner_frame), control.label)
    };
    let style = theme.button(focused, control.enabled);
    let p = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(p, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let hints = if app.form.modal().is_open() {
        " Enter/Esc close │ Ctrl+C quit"
    } else {
        " Tab/↑↓ move │ ←/→ choose │ Ctrl+S send │ PgUp/PgDn scroll │ Ctrl+C quit"
    };
    f.render_widget(Paragraph::new(hints).style(theme.text_dim()), area);
}

fn render_modal(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let progress = app.form.modal().progress(Instant::now());
    let layout = ModalLayout::calculate(area);

    f.buffer_mut().set_style(area, theme.backdrop());

    // Grow (or shrink) vertically around the final box.
    let full = layout.content;
    let height = ((f32::from(full.height) * progress).ceil() as u16).clamp(1, full.height.max(1));
    let animated = Rect {
        y: full.y + full.height.saturating_sub(height) / 2,
        height,
        ..full
    };
    f.render_widget(Clear, animated);

    let block = Block::default()
        .title(MODAL_TITLE)
        .borders(Borders::ALL)
        .border_style(theme.success().add_modifier(Modifier::BOLD));
    let inner = block.inner(animated);
    f.render_widget(block, animated);

    if animated == full {
        let message = Paragraph::new(SUCCESS_MESSAGE)
            .style(theme.success())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        let text_area = Rect {
            height: inner.height.saturating_sub(2),
            ..inner
        };
        f.render_widget(message, text_area);

        let button = Paragraph::new(CLOSE_BUTTON_TEXT).style(theme.button(true, true));
        f.render_widget(button, layout.close_button);
    }

    if app.form.modal().is_open() {
        app.form
            .modal_mut()
            .set_areas(layout.content, layout.close_button);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_lines_keeps_tail() {
        let inner = Rect::new(0, 0, 6, 2);
        let lines = visible_lines("first\nsecond\nthird line", inner);
        assert_eq!(lines, vec!["econd".to_string(), " line".to_string()]);
    }

    #[test]
    fn test_visible_lines_single_short_value() {
        let lines = visible_lines("Asha", Rect::new(0, 0, 20, 1));
        assert_eq!(lines, vec!["Asha".to_string()]);
    }
}
