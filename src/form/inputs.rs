//! Terminal-side form controls and indicators.
//!
//! `FormInputs` is the field extractor: it stores what the user typed and
//! reports a `RegistrationRecord` on demand. Every edit returns whether the
//! value actually changed, so callers only fire the field-change transition
//! for real input.

use tracing::warn;

use super::capability::{FormFieldSource, Presenter};
use crate::models::{Field, RegistrationRecord, GENDER_OPTIONS};

#[derive(Debug, Clone, Default)]
pub struct FormInputs {
    text: RegistrationRecord,
    choice: Option<usize>,
}

impl FormInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all controls with the values from `record`.
    /// An unknown gender leaves the choice group unselected.
    pub fn prefill(&mut self, record: &RegistrationRecord) {
        self.text = record.clone();
        self.text.gender.clear();
        self.choice = if record.gender.is_empty() {
            None
        } else {
            let found = GENDER_OPTIONS
                .iter()
                .position(|o| o.eq_ignore_ascii_case(record.gender.trim()));
            if found.is_none() {
                warn!(gender = %record.gender, "ignoring unknown gender in prefill");
            }
            found
        };
    }

    /// Current display value of a control
    pub fn value(&self, field: Field) -> &str {
        if field.is_choice() {
            self.choice.map(|i| GENDER_OPTIONS[i]).unwrap_or("")
        } else {
            self.text.get(field)
        }
    }

    /// Index of the selected choice, if any
    pub fn choice(&self) -> Option<usize> {
        self.choice
    }

    pub fn insert_char(&mut self, field: Field, c: char) -> bool {
        if field.is_choice() || c.is_control() {
            return false;
        }
        self.text.get_mut(field).push(c);
        true
    }

    pub fn backspace(&mut self, field: Field) -> bool {
        if field.is_choice() {
            return false;
        }
        self.text.get_mut(field).pop().is_some()
    }

    pub fn clear(&mut self, field: Field) -> bool {
        if field.is_choice() {
            return self.choice.take().is_some();
        }
        let value = self.text.get_mut(field);
        if value.is_empty() {
            return false;
        }
        value.clear();
        true
    }

    pub fn select_choice(&mut self, index: usize) -> bool {
        if index >= GENDER_OPTIONS.len() || self.choice == Some(index) {
            return false;
        }
        self.choice = Some(index);
        true
    }

    pub fn select_next_choice(&mut self) -> bool {
        let next = match self.choice {
            None => 0,
            Some(i) => (i + 1) % GENDER_OPTIONS.len(),
        };
        self.select_choice(next)
    }

    pub fn select_prev_choice(&mut self) -> bool {
        let len = GENDER_OPTIONS.len();
        let prev = match self.choice {
            None => len - 1,
            Some(i) => (i + len - 1) % len,
        };
        self.select_choice(prev)
    }
}

impl FormFieldSource for FormInputs {
    fn read(&self) -> RegistrationRecord {
        let mut record = self.text.clone();
        record.gender = self.value(Field::Gender).to_string();
        record
    }
}

/// Banner and button flags rendered by the UI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenIndicators {
    pub success_visible: bool,
    pub error_visible: bool,
    pub download_enabled: bool,
}

impl Presenter for ScreenIndicators {
    fn show_success(&mut self) {
        self.success_visible = true;
    }

    fn show_error(&mut self) {
        self.error_visible = true;
    }

    fn hide_all(&mut self) {
        self.success_visible = false;
        self.error_visible = false;
    }

    fn set_download_enabled(&mut self, enabled: bool) {
        self.download_enabled = enabled;
    }
}
