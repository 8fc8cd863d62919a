//! Keyboard focus across the form's interactive elements.
//!
//! Focus order is the form order followed by the submit button. Moving focus
//! reports the element that lost it so the caller can raise a blur event.

use crate::form::FieldId;

/// Something that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Field(FieldId),
    Submit,
}

impl FocusTarget {
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::Field(id) => Some(*id),
            Self::Submit => None,
        }
    }
}

/// Cyclic focus ring.
#[derive(Debug, Clone)]
pub struct FocusRing {
    order: Vec<FocusTarget>,
    current: usize,
}

impl Default for FocusRing {
    fn default() -> Self {
        let mut order: Vec<_> = FieldId::ALL.into_iter().map(FocusTarget::Field).collect();
        order.push(FocusTarget::Submit);
        Self { order, current: 0 }
    }
}

impl FocusRing {
    pub fn current(&self) -> FocusTarget {
        self.order[self.current]
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.current() == target
    }

    /// Move to the next element, returning the one that lost focus.
    pub fn next(&mut self) -> FocusTarget {
        let previous = self.current();
        self.current = (self.current + 1) % self.order.len();
        previous
    }

    /// Move to the previous element, returning the one that lost focus.
    pub fn prev(&mut self) -> FocusTarget {
        let previous = self.current();
        self.current = self.current.checked_sub(1).unwrap_or(self.order.len() - 1);
        previous
    }

    /// Focus `target`. Returns the element that lost focus, or `None` if
    /// `target` already had it.
    pub fn set_focus(&mut self, target: FocusTarget) -> Option<FocusTarget> {
        let index = self.order.iter().position(|t| *t == target)?;
        if index == self.current {
            return None;
        }
        let previous = self.current();
        self.current = index;
        Some(previous)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn targets(&self) -> &[FocusTarget] {
        &self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order_ends_with_submit() {
        let ring = FocusRing::default();
        assert_eq!(ring.len(), 6);
        assert_eq!(ring.current(), FocusTarget::Field(FieldId::FullName));
        assert_eq!(ring.targets().last(), Some(&FocusTarget::Submit));
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut ring = FocusRing::default();
        assert_eq!(ring.prev(), FocusTarget::Field(FieldId::FullName));
        assert!(ring.is_focused(FocusTarget::Submit));

        assert_eq!(ring.next(), FocusTarget::Submit);
        assert!(ring.is_focused(FocusTarget::Field(FieldId::FullName)));
    }

    #[test]
    fn test_set_focus_reports_previous() {
        let mut ring = FocusRing::default();
        assert_eq!(
            ring.set_focus(FocusTarget::Field(FieldId::Phone)),
            Some(FocusTarget::Field(FieldId::FullName))
        );
        assert_eq!(ring.set_focus(FocusTarget::Field(FieldId::Phone)), None);
        assert_eq!(ring.current().field(), Some(FieldId::Phone));
    }
}
