//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Background submission task (`side_effects`)
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `contact_tui::app` and `contact_tui::ui`).
//! - The delivery policy itself (see `contact_client::SubmissionService`).

pub mod side_effects;
pub mod terminal;
