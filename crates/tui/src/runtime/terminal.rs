//! Terminal state management and cleanup.
//!
//! Responsibilities:
//! - Ensure terminal state is restored on application exit, even during panics.
//! - Enter raw mode and the alternate screen, and undo both on Drop.
//!
//! Does NOT handle:
//! - Creating the ratatui `Terminal` (done in `main.rs`).
//!
//! Invariants / Assumptions:
//! - Must live for the duration of the TUI session.
//! - Drop implementation must not panic.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Restores the terminal when dropped, including during a panic.
pub struct TerminalGuard {
    no_mouse: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen, with mouse capture unless `no_mouse`.
    pub fn enter(no_mouse: bool) -> std::io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { no_mouse };
        let mut stdout = std::io::stdout();
        if no_mouse {
            execute!(stdout, EnterAlternateScreen)?;
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Errors are ignored: drop must not panic.
        let _ = disable_raw_mode();
        let mut stdout = std::io::stdout();
        if self.no_mouse {
            let _ = execute!(stdout, LeaveAlternateScreen);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        }
    }
}
