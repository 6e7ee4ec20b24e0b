//! Employee service
//!
//! Orchestrates validation and storage for add, list, view, edit and delete.
//! Each handler loads the roster fresh, mutates it in memory and saves it
//! back in one write, so a rejected request never touches the file.

use std::fmt;

use crate::audit::AuditEntry;
use crate::error::RosterResult;
use crate::models::{is_valid_email, is_valid_id, is_valid_phone, Employee, EmployeePatch};
use crate::storage::{self, Storage};

/// Source of field values for the handlers
///
/// Handlers ask for one field at a time, so a failed check can stop before
/// the next field is requested.
pub trait Prompter {
    /// Ask for a single line of input
    fn ask(&mut self, prompt: &str) -> RosterResult<String>;

    /// Show an informational line in the middle of a flow
    fn note(&mut self, message: &str) -> RosterResult<()>;
}

/// Why a submitted field was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidId,
    InvalidPhone,
    InvalidEmail,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "Invalid ID format! Must be 3 digits."),
            Self::InvalidPhone => write!(f, "Invalid phone number format!"),
            Self::InvalidEmail => write!(f, "Invalid email address format!"),
        }
    }
}

/// Result of one handler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The action completed; message for the user
    Success(String),
    /// Non-empty roster, sorted by ID
    Listing(Vec<Employee>),
    /// A single employee, for the detail view
    Details(Employee),
    /// A field failed its check; nothing was written
    ValidationFailed(Rejection),
    /// No employee with the requested ID
    NotFound,
    /// The requested ID is already taken
    DuplicateId,
}

pub const ADDED: &str = "Employee added successfully!";
pub const UPDATED: &str = "Employee updated successfully!";
pub const DELETED: &str = "Employee deleted successfully!";
pub const NO_EMPLOYEES: &str = "No employees found.";

/// Service for employee management
pub struct EmployeeService<'a> {
    storage: &'a Storage,
}

impl<'a> EmployeeService<'a> {
    /// Create a new employee service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add a new employee
    ///
    /// Fields are requested in order (id, name, phone, position, email) and
    /// the first one that fails stops the flow. The name is never checked.
    pub fn add(&self, prompter: &mut dyn Prompter) -> RosterResult<Outcome> {
        let id = prompter.ask("Enter Employee ID (3-digit numeric): ")?;
        if !is_valid_id(&id) {
            return Ok(Outcome::ValidationFailed(Rejection::InvalidId));
        }

        let mut employees = self.storage.employees.load_all()?;
        if storage::find_by_id(&employees, &id).is_some() {
            return Ok(Outcome::DuplicateId);
        }

        let name = prompter.ask("Enter Name: ")?;
        let phone = prompter.ask("Enter Phone Number (XX-XXX-XXXX or XXX-XXXX-XXXX): ")?;
        if !is_valid_phone(&phone) {
            return Ok(Outcome::ValidationFailed(Rejection::InvalidPhone));
        }

        let position = prompter.ask("Enter Position: ")?;
        let email = prompter.ask("Enter Email Address: ")?;
        if !is_valid_email(&email) {
            return Ok(Outcome::ValidationFailed(Rejection::InvalidEmail));
        }

        let employee = Employee::new(id, name, phone, position, email);
        let entry = AuditEntry::added(&employee);
        storage::insert(&mut employees, employee);
        self.storage.commit(&employees, Some(entry))?;

        Ok(Outcome::Success(ADDED.to_string()))
    }

    /// List all employees, sorted by ID
    pub fn list(&self) -> RosterResult<Outcome> {
        let mut employees = self.storage.employees.load_all()?;
        if employees.is_empty() {
            return Ok(Outcome::Success(NO_EMPLOYEES.to_string()));
        }

        // IDs are fixed-width digits, so string order is numeric order
        employees.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(Outcome::Listing(employees))
    }

    /// Show one employee in full
    pub fn view(&self, prompter: &mut dyn Prompter) -> RosterResult<Outcome> {
        let id = prompter.ask("Enter Employee ID: ")?;
        let employees = self.storage.employees.load_all()?;

        Ok(match storage::find_by_id(&employees, &id) {
            Some(employee) => Outcome::Details(employee.clone()),
            None => Outcome::NotFound,
        })
    }

    /// Edit an existing employee
    ///
    /// Blank answers keep the current value. A new phone or email that fails
    /// its check is dropped without complaint. The roster is saved and the
    /// edit reported as successful even when nothing changed. Only a real
    /// change is audited.
    pub fn edit(&self, prompter: &mut dyn Prompter) -> RosterResult<Outcome> {
        let id = prompter.ask("Enter Employee ID to edit: ")?;
        let mut employees = self.storage.employees.load_all()?;

        let Some(before) = storage::find_by_id(&employees, &id).cloned() else {
            return Ok(Outcome::NotFound);
        };

        prompter.note(&format!("Editing Employee: {}", before.name))?;

        let patch = EmployeePatch {
            name: prompter.ask("Enter New Name (leave blank to keep current): ")?,
            phone: prompter.ask("Enter New Phone (leave blank to keep current): ")?,
            position: prompter.ask("Enter New Position (leave blank to keep current): ")?,
            email: prompter.ask("Enter New Email (leave blank to keep current): ")?,
        };

        storage::update(&mut employees, &id, &patch);
        let entry = storage::find_by_id(&employees, &id)
            .filter(|after| **after != before)
            .map(|after| AuditEntry::edited(&before, after));
        self.storage.commit(&employees, entry)?;

        Ok(Outcome::Success(UPDATED.to_string()))
    }

    /// Delete an employee
    pub fn delete(&self, prompter: &mut dyn Prompter) -> RosterResult<Outcome> {
        let id = prompter.ask("Enter Employee ID to delete: ")?;
        let mut employees = self.storage.employees.load_all()?;

        let Some(removed) = storage::delete(&mut employees, &id) else {
            return Ok(Outcome::NotFound);
        };

        self.storage.commit(&employees, Some(AuditEntry::removed(&removed)))?;

        Ok(Outcome::Success(DELETED.to_string()))
    }
}
