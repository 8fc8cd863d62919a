//! Colors and style builders used by the form renderer.

use ratatui::style::{Color, Modifier, Style};

/// Spinner characters shown next to the label while a submission is in flight.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub text: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub success: Color,
    pub error: Color,
    pub disabled: Color,
    pub backdrop: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            accent: Color::Cyan,
            border: Color::Gray,
            border_focused: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            disabled: Color::DarkGray,
            backdrop: Color::Black,
        }
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Border of an input box. An invalid field always wins over focus.
    pub fn input_border(&self, focused: bool, flagged: bool) -> Style {
        match (focused, flagged) {
            (_, true) => Style::default().fg(self.error),
            (true, false) => Style::default().fg(self.border_focused),
            (false, false) => Style::default().fg(self.border),
        }
    }

    pub fn button(&self, focused: bool, enabled: bool) -> Style {
        if !enabled {
            return Style::default().fg(self.disabled);
        }
        let style = Style::default().fg(self.accent);
        if focused {
            style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            style
        }
    }

    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn backdrop(&self) -> Style {
        Style::default().bg(self.backdrop).fg(self.text_dim)
    }
}
