//! Service layer for the roster
//!
//! One handler per menu action. Handlers pull field values from a
//! [`Prompter`] as they need them and return an [`Outcome`] for the shell to
//! render; only storage failures come back as errors.

pub mod employee;

pub use employee::{EmployeeService, Outcome, Prompter, Rejection};
