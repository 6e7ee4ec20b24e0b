//! Core data models for the roster
//!
//! This module contains the employee record, its edit patch and the field
//! validators used by the add and edit flows.

pub mod employee;
pub mod validate;

pub use employee::{Employee, EmployeePatch};
pub use validate::{is_valid_email, is_valid_id, is_valid_phone};
