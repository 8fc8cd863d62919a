//! UI modules: layout, drawing, inline status, modal state and colors.

pub mod layout;
pub mod modal;
pub mod render;
pub mod status;
pub mod theme;

pub use modal::{ModalClick, ModalController, ModalPhase};
pub use status::{StatusDisplay, StatusLevel, StatusMessage};
pub use theme::Theme;
