//! Data models for the registration form
//!
//! This module contains the core data structures:
//! - Registration record and field identifiers
//! - Enums for focus and download outcomes

pub mod enums;
pub mod record;

// Re-exports for convenient access
pub use enums::{DownloadOutcome, Focus};
pub use record::{blank_fields, is_valid, Field, RegistrationRecord, GENDER_OPTIONS};
