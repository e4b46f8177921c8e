//! Enums used throughout the registration form
//!
//! This module contains the focus and outcome types used for state
//! management and UI rendering.

use std::path::PathBuf;

use super::record::Field;

/// Focusable element of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Submit,
    Download,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Name)
    }
}

impl Focus {
    /// Tab order: the eight fields, then Submit, then Download
    pub const ORDER: [Focus; 10] = [
        Focus::Field(Field::Name),
        Focus::Field(Field::RollNumber),
        Focus::Field(Field::College),
        Focus::Field(Field::Branch),
        Focus::Field(Field::Email),
        Focus::Field(Field::Mobile),
        Focus::Field(Field::Gender),
        Focus::Field(Field::YearOfStudy),
        Focus::Submit,
        Focus::Download,
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Focus::Field(field) => Some(*field),
            _ => None,
        }
    }
}

/// Result of a download request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// CSV written to this path
    Offered(PathBuf),
    /// No valid record held; error banner shown instead
    NoValidRecord,
}
