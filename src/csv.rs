//! CSV export of a registration record.
//!
//! Produces a two-line document: the fixed header followed by one data row.
//! Fields containing a comma, a double quote or a newline are wrapped in
//! double quotes with internal quotes doubled; all others are emitted as-is.

use crate::models::{Field, RegistrationRecord};

/// Header line, without its terminating newline.
pub const CSV_HEADER: &str = "Name,Roll Number,College,Branch,Email,Mobile,Gender,Year of Study";

/// Escape a single field. A missing value encodes as an empty quoted field.
pub fn escape_field(field: Option<&str>) -> String {
    let Some(value) = field else {
        return "\"\"".to_string();
    };

    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Encode the data row for a record (no header, no trailing newline).
pub fn encode_row(record: &RegistrationRecord) -> String {
    Field::ALL
        .iter()
        .map(|f| escape_field(Some(record.get(*f))))
        .collect::<Vec<_>>()
        .join(",")
}

/// Encode the full CSV document: header, newline, data row.
pub fn encode_record(record: &RegistrationRecord) -> String {
    format!("{}\n{}", CSV_HEADER, encode_row(record))
}
