//! Validation state and the success-banner auto-hide deadline.

use std::time::Instant;

use crate::models::RegistrationRecord;

/// Last validated snapshot, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ValidationState {
    #[default]
    Empty,
    Valid(RegistrationRecord),
}

impl ValidationState {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationState::Valid(_))
    }

    pub fn record(&self) -> Option<&RegistrationRecord> {
        match self {
            ValidationState::Valid(record) => Some(record),
            ValidationState::Empty => None,
        }
    }
}

/// One-shot cancellable deadline
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoHide {
    deadline: Option<Instant>,
}

impl AutoHide {
    /// Schedule the hide, replacing any pending one
    pub fn schedule(&mut self, at: Instant) {
        self.deadline = Some(at);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true exactly once, on the first call at or after the deadline
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
