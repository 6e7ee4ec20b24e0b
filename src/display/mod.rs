//! Display formatting for terminal output
//!
//! Turns handler outcomes and employee records into the lines the menu
//! prints.

pub mod employee;

pub use employee::{format_employee_details, format_employee_row, outcome_lines};
