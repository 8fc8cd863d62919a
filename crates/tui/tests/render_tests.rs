//! Rendering tests against ratatui's `TestBackend`.

mod helpers;

use std::time::{Duration, Instant};

use contact_client::SubmissionOutcome;
use contact_config::DeliveryMode;
use contact_tui::form::controller::{BLOCKED_MESSAGE, SUBMITTING_LABEL, SUBMIT_LABEL};
use contact_tui::form::validation::{FULL_NAME_ERROR, MESSAGE_ERROR};
use contact_tui::form::{FieldId, FormEvent};
use contact_tui::ui::layout::{FormLayout, form_viewport};
use contact_tui::ui::render::MODAL_TITLE;
use contact_tui::{Action, App};
use helpers::*;
use ratatui::style::Color;
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};

/// Test harness for TUI rendering with a mock terminal.
struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    fn new(mode: DeliveryMode, width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        let mut app = App::new(mode, Duration::from_secs(6));
        app.last_area = Rect::new(0, 0, width, height);
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    fn render(&mut self) -> String {
        self.terminal
            .draw(|f| self.app.render(f))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }

    fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn fill_valid(app: &mut App) {
    type_text(app, "Asha Rao");
    app.update(Action::Input(tab_key()));
    type_text(app, "asha@example.com");
    app.update(Action::Input(tab_key()));
    type_text(app, "9876543210");
    app.update(Action::Input(tab_key()));
    app.update(Action::Input(right_key()));
    app.update(Action::Input(tab_key()));
    type_text(app, "Hello, I need a quote.");
}

#[test]
fn test_renders_all_labels_and_submit() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 50);
    let screen = h.render();

    for id in FieldId::ALL {
        assert!(screen.contains(id.label()), "missing label {}", id.label());
    }
    assert!(screen.contains(SUBMIT_LABEL));
    assert!(screen.contains("Contact Us"));
}

#[test]
fn test_invalid_field_shows_error_and_red_border() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 50);
    h.app.update(Action::Form(FormEvent::Blur(FieldId::FullName)));
    let screen = h.render();

    assert!(screen.contains(FULL_NAME_ERROR));
    assert!(!screen.contains(MESSAGE_ERROR));

    let layout = FormLayout::calculate(form_viewport(h.app.last_area), h.app.scroll);
    let input = layout
        .field(FieldId::FullName)
        .and_then(|f| f.input)
        .expect("full name visible");
    assert_eq!(h.buffer()[(input.x, input.y)].fg, Color::Red);
}

#[test]
fn test_submitting_label_while_in_flight() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 50);
    fill_valid(&mut h.app);
    h.app.update(Action::Input(ctrl_key('s'))).expect("payload");

    let screen = h.render();
    assert!(screen.contains(SUBMITTING_LABEL));
    assert!(!screen.contains(SUBMIT_LABEL));

    h.app
        .update(Action::SubmissionFinished(SubmissionOutcome::Delivered));
    let screen = h.render();
    assert!(screen.contains(SUBMIT_LABEL));
    assert!(screen.contains("Thank you!"));
}

#[test]
fn test_success_status_visible_on_small_terminal() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 24);
    h.app.update(Action::Resize(80, 24));
    fill_valid(&mut h.app);
    h.app.update(Action::Input(ctrl_key('s'))).expect("payload");
    h.app
        .update(Action::SubmissionFinished(SubmissionOutcome::Delivered));

    let layout = FormLayout::calculate(form_viewport(h.app.last_area), h.app.scroll);
    assert!(layout.status.is_some(), "status line scrolled out of view");
    assert!(h.render().contains("Thank you!"));
}

#[test]
fn test_blocked_status_visible_on_small_terminal() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 24);
    h.app.update(Action::Resize(80, 24));
    assert_eq!(h.app.scroll, 0);

    assert!(h.app.update(Action::Input(ctrl_key('s'))).is_none());

    let screen = h.render();
    assert!(screen.contains(BLOCKED_MESSAGE));
}

#[test]
fn test_modal_renders_message_and_close_button() {
    let mut h = TuiHarness::new(DeliveryMode::FireAndForget, 100, 50);
    fill_valid(&mut h.app);
    h.app.update(Action::Input(ctrl_key('s'))).expect("payload");
    h.app
        .update(Action::SubmissionFinished(SubmissionOutcome::Delivered));
    // Skip the entrance animation.
    h.app.form.tick(Instant::now() + Duration::from_secs(1));

    let screen = h.render();
    assert!(screen.contains(MODAL_TITLE));
    assert!(screen.contains("[ Close ]"));
    assert!(screen.contains("Thank you!"));
}

#[test]
fn test_scrolled_form_hides_header() {
    let mut h = TuiHarness::new(DeliveryMode::Readable, 80, 12);
    h.app.focus.set_focus(contact_tui::focus::FocusTarget::Submit);
    h.app.scroll_into_view(contact_tui::focus::FocusTarget::Submit);

    let screen = h.render();
    assert!(screen.contains(SUBMIT_LABEL));
    assert!(!screen.contains("Contact Us"));
}
