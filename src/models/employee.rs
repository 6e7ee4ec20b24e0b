//! Employee model
//!
//! One roster entry and its canonical single-line text form:
//! `id,name,phone,position,email`. Fields are not escaped, so a comma inside
//! a field will make the stored line unreadable.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate::{is_valid_email, is_valid_phone};

/// Separator between fields in the stored line
const FIELD_SEPARATOR: char = ',';

/// Number of fields in a stored line
const FIELD_COUNT: usize = 5;

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Three-digit identifier, unique within the roster
    pub id: String,

    /// Full name
    pub name: String,

    /// Phone number (`XX-XXX-XXXX` or `XXX-XXXX-XXXX`)
    pub phone: String,

    /// Job title
    pub position: String,

    /// Email address
    pub email: String,
}

impl Employee {
    /// Create a new employee
    ///
    /// Nothing is validated here; the add flow checks fields before building
    /// the record.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        position: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            position: position.into(),
            email: email.into(),
        }
    }

    /// Render the canonical stored line, without the trailing newline
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    /// Parse a stored line
    ///
    /// Returns `None` unless the line splits into exactly five fields.
    /// Surrounding whitespace, including the line terminator, is ignored.
    pub fn from_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return None;
        }

        Some(Self::new(
            fields[0], fields[1], fields[2], fields[3], fields[4],
        ))
    }

    /// Apply an edit patch in place
    ///
    /// Blank values keep the current field. A new phone or email that fails
    /// validation is silently ignored, while name and position are taken as
    /// given. Returns true if any field changed.
    pub fn apply(&mut self, patch: &EmployeePatch) -> bool {
        let before = self.clone();

        if !patch.name.is_empty() {
            self.name = patch.name.clone();
        }
        if !patch.phone.is_empty() && is_valid_phone(&patch.phone) {
            self.phone = patch.phone.clone();
        }
        if !patch.position.is_empty() {
            self.position = patch.position.clone();
        }
        if !patch.email.is_empty() && is_valid_email(&patch.email) {
            self.email = patch.email.clone();
        }

        *self != before
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{}",
            self.id, self.name, self.phone, self.position, self.email
        )
    }
}

/// Proposed new values for an existing employee
///
/// An empty string means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeePatch {
    pub name: String,
    pub phone: String,
    pub position: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee::new(
            "001",
            "Ada Lovelace",
            "12-345-6789",
            "Engineer",
            "ada@example.com",
        )
    }

    #[test]
    fn test_to_line() {
        assert_eq!(
            sample().to_line(),
            "001,Ada Lovelace,12-345-6789,Engineer,ada@example.com"
        );
    }

    #[test]
    fn test_display_matches_line() {
        let employee = sample();
        assert_eq!(employee.to_string(), employee.to_line());
    }

    #[test]
    fn test_line_round_trip() {
        let records = [
            sample(),
            Employee::new("000", "", "00-000-0000", "", "a@b.co"),
            Employee::new(
                "999",
                "Jean-Luc Picard",
                "123-4567-8901",
                "Captain",
                "jl@starfleet.fed.org",
            ),
            Employee::new(
                "042",
                "O'Brien",
                "12-345-6789",
                "Chief of Ops",
                "miles.o-brien@ds9.station.net",
            ),
        ];

        for employee in records {
            let line = employee.to_line();
            let parsed = Employee::from_line(&line).unwrap();
            assert_eq!(parsed, employee);
            assert_eq!(parsed.to_line(), line);
        }
    }

    #[test]
    fn test_from_line_strips_terminator() {
        let parsed = Employee::from_line("002,Bob,123-4567-8901,Clerk,bob@x.io\r\n").unwrap();
        assert_eq!(parsed.id, "002");
        assert_eq!(parsed.email, "bob@x.io");
    }

    #[test]
    fn test_from_line_rejects_wrong_field_count() {
        assert!(Employee::from_line("001,Ada,12-345-6789,Engineer").is_none());
        assert!(Employee::from_line("001,Ada,Lovelace,12-345-6789,Engineer,a@b.co").is_none());
        assert!(Employee::from_line("").is_none());
    }

    #[test]
    fn test_from_line_keeps_empty_fields() {
        let parsed = Employee::from_line("003,,12-345-6789,,c@d.ef").unwrap();
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.position, "");
    }

    #[test]
    fn test_blank_patch_changes_nothing() {
        let mut employee = sample();
        let patch = EmployeePatch::default();

        assert!(!employee.apply(&patch));
        assert_eq!(employee, sample());
    }

    #[test]
    fn test_patch_applies_valid_fields() {
        let mut employee = sample();
        let patch = EmployeePatch {
            name: "Ada King".into(),
            phone: "123-4567-8901".into(),
            position: "Lead".into(),
            email: "ada@king.org".into(),
        };

        assert!(employee.apply(&patch));
        assert_eq!(employee.name, "Ada King");
        assert_eq!(employee.phone, "123-4567-8901");
        assert_eq!(employee.position, "Lead");
        assert_eq!(employee.email, "ada@king.org");
    }

    #[test]
    fn test_patch_skips_invalid_phone_and_email() {
        let mut employee = sample();
        let patch = EmployeePatch {
            name: "Ada King".into(),
            phone: "not-a-phone".into(),
            position: String::new(),
            email: "nobody".into(),
        };

        assert!(employee.apply(&patch));
        assert_eq!(employee.name, "Ada King");
        assert_eq!(employee.phone, "12-345-6789");
        assert_eq!(employee.position, "Engineer");
        assert_eq!(employee.email, "ada@example.com");
    }
}
