//! Action protocol for the TUI event loop.
//!
//! # Module Structure
//!
//! - `redaction`: logging wrapper that hides form values (`RedactedAction`)
//! - `variants`: the `Action` enum
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `App::update`)
//! - Running the submission (see `runtime::side_effects`)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::Action;

#[cfg(test)]
mod tests;
