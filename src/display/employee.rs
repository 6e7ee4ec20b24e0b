//! Employee display formatting

use crate::models::Employee;
use crate::services::Outcome;

pub const NOT_FOUND: &str = "Employee not found!";
pub const DUPLICATE_ID: &str = "Employee ID must be unique!";
pub const LIST_HEADER: &str = "Employee List:";

/// One summary row of the employee list
pub fn format_employee_row(employee: &Employee) -> String {
    format!(
        "ID: {}, Name: {}, Phone: {}",
        employee.id, employee.name, employee.phone
    )
}

/// Full detail view, one field per line
pub fn format_employee_details(employee: &Employee) -> String {
    format!(
        "ID: {}\nName: {}\nPhone: {}\nPosition: {}\nEmail: {}",
        employee.id, employee.name, employee.phone, employee.position, employee.email
    )
}

/// Lines to print for a handler outcome
///
/// Listing rows are formatted one at a time as the iterator is consumed.
pub fn outcome_lines(outcome: &Outcome) -> Box<dyn Iterator<Item = String> + '_> {
    match outcome {
        Outcome::Success(message) => Box::new(std::iter::once(message.clone())),
        Outcome::Listing(employees) => Box::new(
            std::iter::once(LIST_HEADER.to_string())
                .chain(employees.iter().map(format_employee_row)),
        ),
        Outcome::Details(employee) => Box::new(std::iter::once(format_employee_details(employee))),
        Outcome::ValidationFailed(reason) => Box::new(std::iter::once(reason.to_string())),
        Outcome::NotFound => Box::new(std::iter::once(NOT_FOUND.to_string())),
        Outcome::DuplicateId => Box::new(std::iter::once(DUPLICATE_ID.to_string())),
    }
}
