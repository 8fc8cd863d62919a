//! The contact form: fields, validators, event wiring and the controller.

pub mod controller;
pub mod events;
pub mod field;
pub mod validation;

pub use controller::{ContactFormController, SubmissionPhase, SubmitControl};
pub use events::{EventSubscriptions, FormEvent, FormEventKind, ModalCloseTrigger};
pub use field::{FieldId, FormField};
