//! Audit entry data structures
//!
//! One entry per saved change. Records are stored as typed employees rather
//! than loose JSON, so the log reads back into the same model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diff::generate_diff;
use crate::models::Employee;

/// Kind of change recorded in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

/// A single audit log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change was made (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// ID of the employee that changed
    pub employee_id: String,

    /// Record as it was before the change (edits and deletes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Employee>,

    /// Record as it is after the change (adds and edits)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Employee>,

    /// `field: "old" -> "new"` pairs for edits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    /// Entry for a newly added employee
    pub fn added(employee: &Employee) -> Self {
        Self::new(Operation::Create, &employee.id, None, Some(employee.clone()))
    }

    /// Entry for an edited employee, with the changed fields spelled out
    pub fn edited(before: &Employee, after: &Employee) -> Self {
        let mut entry = Self::new(
            Operation::Update,
            &after.id,
            Some(before.clone()),
            Some(after.clone()),
        );
        entry.changes = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(old), Ok(new)) => generate_diff(&old, &new),
            _ => None,
        };
        entry
    }

    /// Entry for a removed employee
    pub fn removed(employee: &Employee) -> Self {
        Self::new(Operation::Delete, &employee.id, Some(employee.clone()), None)
    }

    fn new(
        operation: Operation,
        employee_id: &str,
        before: Option<Employee>,
        after: Option<Employee>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            employee_id: employee_id.to_string(),
            before,
            after,
            changes: None,
        }
    }
}
