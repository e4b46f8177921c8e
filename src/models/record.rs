//! Registration record data structures
//!
//! This module contains the eight-field record captured from the form and
//! the all-or-nothing validator that decides whether it can be exported.

use serde::Deserialize;
use std::io;
use std::path::Path;

/// One of the eight form fields, in export order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    RollNumber,
    College,
    Branch,
    Email,
    Mobile,
    Gender,
    YearOfStudy,
}

impl Field {
    /// All fields in the fixed header order
    pub const ALL: [Field; 8] = [
        Field::Name,
        Field::RollNumber,
        Field::College,
        Field::Branch,
        Field::Email,
        Field::Mobile,
        Field::Gender,
        Field::YearOfStudy,
    ];

    /// Stable control id
    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::RollNumber => "roll-number",
            Field::College => "college",
            Field::Branch => "branch",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Gender => "gender",
            Field::YearOfStudy => "year-of-study",
        }
    }

    /// Human label, also used as the CSV header cell
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::RollNumber => "Roll Number",
            Field::College => "College",
            Field::Branch => "Branch",
            Field::Email => "Email",
            Field::Mobile => "Mobile",
            Field::Gender => "Gender",
            Field::YearOfStudy => "Year of Study",
        }
    }

    /// Whether the field is a mutually-exclusive choice group rather than free text
    pub fn is_choice(&self) -> bool {
        matches!(self, Field::Gender)
    }
}

/// Options offered by the gender choice group
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Registration record - every attribute is plain text
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationRecord {
    pub name: String,
    pub roll_number: String,
    pub college: String,
    pub branch: String,
    pub email: String,
    pub mobile: String,
    pub gender: String,
    pub year_of_study: String,
}

impl RegistrationRecord {
    /// Load a record from a JSON file (camelCase keys, missing keys are blank)
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::RollNumber => &self.roll_number,
            Field::College => &self.college,
            Field::Branch => &self.branch,
            Field::Email => &self.email,
            Field::Mobile => &self.mobile,
            Field::Gender => &self.gender,
            Field::YearOfStudy => &self.year_of_study,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::RollNumber => &mut self.roll_number,
            Field::College => &mut self.college,
            Field::Branch => &mut self.branch,
            Field::Email => &mut self.email,
            Field::Mobile => &mut self.mobile,
            Field::Gender => &mut self.gender,
            Field::YearOfStudy => &mut self.year_of_study,
        }
    }

    /// Attribute values in header order
    pub fn values(&self) -> [&str; 8] {
        Field::ALL.map(|f| self.get(f))
    }
}

/// True iff every attribute is non-empty after trimming whitespace
pub fn is_valid(record: &RegistrationRecord) -> bool {
    record.values().iter().all(|v| !v.trim().is_empty())
}

/// Fields that are blank after trimming (for diagnostics only)
pub fn blank_fields(record: &RegistrationRecord) -> Vec<Field> {
    Field::ALL
        .into_iter()
        .filter(|f| record.get(*f).trim().is_empty())
        .collect()
}

#[cfg(test)]
pub(crate) fn sample_record() -> RegistrationRecord {
    RegistrationRecord {
        name: "Jane Doe".to_string(),
        roll_number: "21CS045".to_string(),
        college: "ABC Inst".to_string(),
        branch: "CS".to_string(),
        email: "jane@x.com".to_string(),
        mobile: "9999999999".to_string(),
        gender: "Female".to_string(),
        year_of_study: "2".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_sample_record_is_valid() {
        assert!(is_valid(&sample_record()));
        assert!(blank_fields(&sample_record()).is_empty());
    }

    #[test]
    fn test_empty_name_is_invalid() {
        let mut record = sample_record();
        record.name = String::new();
        assert!(!is_valid(&record));
        assert_eq!(blank_fields(&record), vec![Field::Name]);
    }

    #[test]
    fn test_whitespace_only_is_invalid() {
        for field in Field::ALL {
            let mut record = sample_record();
            *record.get_mut(field) = " \t\n ".to_string();
            assert!(!is_valid(&record), "{} should be blank", field.id());
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_valid() {
        let mut record = sample_record();
        record.college = "  ABC Inst  ".to_string();
        assert!(is_valid(&record));
    }

    #[test]
    fn test_default_record_reports_all_blank() {
        let record = RegistrationRecord::default();
        assert!(!is_valid(&record));
        assert_eq!(blank_fields(&record), Field::ALL.to_vec());
    }

    #[test]
    fn test_values_follow_header_order() {
        let record = sample_record();
        assert_eq!(
            record.values(),
            ["Jane Doe", "21CS045", "ABC Inst", "CS", "jane@x.com", "9999999999", "Female", "2"]
        );
    }

    #[test]
    fn test_only_gender_is_choice() {
        let choices: Vec<Field> = Field::ALL.into_iter().filter(|f| f.is_choice()).collect();
        assert_eq!(choices, vec![Field::Gender]);
    }

    #[test]
    fn test_load_camel_case_with_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"name": "Jane", "rollNumber": "7", "yearOfStudy": "3"}}"#).unwrap();

        let record = RegistrationRecord::load(file.path()).unwrap();
        assert_eq!(record.name, "Jane");
        assert_eq!(record.roll_number, "7");
        assert_eq!(record.year_of_study, "3");
        assert_eq!(record.college, "");
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = RegistrationRecord::load(file.path()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
