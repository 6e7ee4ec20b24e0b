//! Storage layer for the roster
//!
//! Provides the plain text employee file with atomic rewrites, plus the
//! optional audit log that records every change made through it.

pub mod employees;
pub mod file_io;

pub use employees::{delete, find_by_id, insert, update, EmployeeRepository, LoadReport};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::{RosterPaths, Settings};
use crate::error::RosterError;
use crate::models::Employee;

/// Storage coordinator: the employee file plus the audit log
pub struct Storage {
    pub employees: EmployeeRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: RosterPaths, settings: &Settings) -> Result<Self, RosterError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            employees: EmployeeRepository::new(paths.data_file(settings)),
            audit,
        })
    }

    /// Persist a changed roster
    ///
    /// The audit entry is written first. If that fails the roster file is
    /// left as it was, so the save is the last step and a reported error
    /// always means nothing was stored.
    pub fn commit(
        &self,
        employees: &[Employee],
        entry: Option<AuditEntry>,
    ) -> Result<(), RosterError> {
        if let (Some(logger), Some(entry)) = (&self.audit, entry) {
            logger.log(&entry)?;
        }

        self.employees.save_all(employees)
    }
}
