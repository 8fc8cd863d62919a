//! Form events and the subscription list that wires them to handlers.
//!
//! The controller never discovers its event sources implicitly. The set of
//! (target, kind) pairs it reacts to is built once at initialization as an
//! [`EventSubscriptions`] list, so tests can drive the controller with the
//! same events the terminal produces.

use crate::form::field::FieldId;

/// The kinds of events a form reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormEventKind {
    /// A field lost focus.
    Blur,
    /// A field's value changed.
    Input,
    /// The form was submitted.
    Submit,
    /// A modal close trigger fired.
    CloseModal,
}

/// Where an event originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Field(FieldId),
    Form,
    Modal,
}

/// Which modal close path fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalCloseTrigger {
    /// The explicit close button (or Enter while the modal is focused).
    Button,
    /// A click on the backdrop outside the modal content.
    Backdrop,
    /// The Escape key.
    Escape,
}

/// A discrete UI event delivered to the form controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Blur(FieldId),
    Input { field: FieldId, value: String },
    Submit,
    CloseModal(ModalCloseTrigger),
}

impl FormEvent {
    pub fn kind(&self) -> FormEventKind {
        match self {
            Self::Blur(_) => FormEventKind::Blur,
            Self::Input { .. } => FormEventKind::Input,
            Self::Submit => FormEventKind::Submit,
            Self::CloseModal(_) => FormEventKind::CloseModal,
        }
    }

    pub fn target(&self) -> EventTarget {
        match self {
            Self::Blur(field) | Self::Input { field, .. } => EventTarget::Field(*field),
            Self::Submit => EventTarget::Form,
            Self::CloseModal(_) => EventTarget::Modal,
        }
    }
}

/// An ordered list of (target, kind) subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSubscriptions {
    entries: Vec<(EventTarget, FormEventKind)>,
}

impl EventSubscriptions {
    /// An empty list. Nothing is handled until subscribed.
    pub fn new() -> Self {
        Self::default()
    }

    /// The contact form wiring: blur on every field, input on text fields
    /// only (the select validates on blur and submit), plus submit and
    /// modal close.
    pub fn standard() -> Self {
        let mut subs = Self::new();
        for field in FieldId::ALL {
            subs.subscribe(EventTarget::Field(field), FormEventKind::Blur);
        }
        for field in FieldId::ALL.into_iter().filter(FieldId::is_text) {
            subs.subscribe(EventTarget::Field(field), FormEventKind::Input);
        }
        subs.subscribe(EventTarget::Form, FormEventKind::Submit);
        subs.subscribe(EventTarget::Modal, FormEventKind::CloseModal);
        subs
    }

    /// Add a subscription. Duplicates are ignored.
    pub fn subscribe(&mut self, target: EventTarget, kind: FormEventKind) {
        if !self.is_subscribed(target, kind) {
            self.entries.push((target, kind));
        }
    }

    pub fn unsubscribe(&mut self, target: EventTarget, kind: FormEventKind) {
        self.entries.retain(|entry| *entry != (target, kind));
    }

    pub fn is_subscribed(&self, target: EventTarget, kind: FormEventKind) -> bool {
        self.entries.contains(&(target, kind))
    }

    /// Whether `event` has a handler.
    pub fn handles(&self, event: &FormEvent) -> bool {
        self.is_subscribed(event.target(), event.kind())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
