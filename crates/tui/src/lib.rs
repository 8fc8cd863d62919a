//! Contact form TUI library.
//!
//! This library provides the form controller, validation, event wiring and
//! UI components for the contact form terminal application.
//!
//! # Example
//!
//! ```rust
//! use contact_tui::{App, Action};
//! use contact_config::DeliveryMode;
//! use crossterm::event::{KeyCode, KeyEvent};
//! use std::time::Duration;
//!
//! let mut app = App::new(DeliveryMode::Readable, Duration::from_secs(6));
//! app.update(Action::Input(KeyEvent::from(KeyCode::Char('A'))));
//! assert_eq!(app.form.value(contact_tui::form::FieldId::FullName), "A");
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod focus;
pub mod form;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::App;
pub use form::{ContactFormController, FieldId, FormEvent};
