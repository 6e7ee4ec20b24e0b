//! Employee repository for the plain text roster file
//!
//! The file holds one `id,name,phone,position,email` line per employee. The
//! repository has no cache: every call reads or rewrites the whole file, and
//! the collection helpers below operate on the loaded `Vec`.
//!
//! There is no locking. Two processes saving the same file race and the last
//! writer wins.

use std::path::PathBuf;

use crate::error::RosterError;
use crate::models::{Employee, EmployeePatch};

use super::file_io::{read_text, write_text_atomic};

/// Result of reading the roster file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records that parsed cleanly, in file order
    pub employees: Vec<Employee>,
    /// Lines that were dropped because they didn't have five fields
    pub skipped_lines: usize,
}

/// Repository for employee persistence
pub struct EmployeeRepository {
    path: PathBuf,
}

impl EmployeeRepository {
    /// Create a new employee repository
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load every well-formed employee from disk
    ///
    /// A missing file is an empty roster. Malformed lines are dropped.
    pub fn load_all(&self) -> Result<Vec<Employee>, RosterError> {
        Ok(self.load_all_with_report()?.employees)
    }

    /// Load employees and count the lines that had to be dropped
    pub fn load_all_with_report(&self) -> Result<LoadReport, RosterError> {
        let contents = read_text(&self.path)?;

        let mut report = LoadReport::default();
        for line in contents.lines() {
            match Employee::from_line(line) {
                Some(employee) => report.employees.push(employee),
                None => report.skipped_lines += 1,
            }
        }

        Ok(report)
    }

    /// Replace the file contents with the given employees
    ///
    /// Anything not in `employees` is gone from the file afterwards.
    pub fn save_all(&self, employees: &[Employee]) -> Result<(), RosterError> {
        let mut contents = String::new();
        for employee in employees {
            contents.push_str(&employee.to_line());
            contents.push('\n');
        }

        write_text_atomic(&self.path, &contents)
    }
}

/// Find the first employee with the given ID
pub fn find_by_id<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}

/// Append an employee
///
/// Uniqueness and field formats are the caller's job, as is saving.
pub fn insert(employees: &mut Vec<Employee>, employee: Employee) {
    employees.push(employee);
}

/// Apply a patch to the first employee with the given ID
///
/// Returns false if no such employee exists. See [`Employee::apply`] for
/// which patch fields are honoured.
pub fn update(employees: &mut [Employee], id: &str, patch: &EmployeePatch) -> bool {
    match employees.iter_mut().find(|e| e.id == id) {
        Some(employee) => {
            employee.apply(patch);
            true
        }
        None => false,
    }
}

/// Remove the first employee with the given ID
pub fn delete(employees: &mut Vec<Employee>, id: &str) -> Option<Employee> {
    let index = employees.iter().position(|e| e.id == id)?;
    Some(employees.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EmployeeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("employees.txt");
        let repo = EmployeeRepository::new(path);
        (temp_dir, repo)
    }

    fn data_file(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("employees.txt")
    }

    fn employee(id: &str, name: &str) -> Employee {
        Employee::new(id, name, "12-345-6789", "Clerk", "someone@example.com")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (temp_dir, repo) = create_test_repo();
        assert!(repo.load_all().unwrap().is_empty());
        assert!(!data_file(&temp_dir).exists());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, repo) = create_test_repo();
        let employees = vec![employee("002", "Bea"), employee("001", "Al")];

        repo.save_all(&employees).unwrap();

        // File order is preserved, not sorted
        assert_eq!(repo.load_all().unwrap(), employees);
    }

    #[test]
    fn test_saved_format() {
        let (temp_dir, repo) = create_test_repo();
        repo.save_all(&[
            Employee::new("001", "Al", "12-345-6789", "Clerk", "al@x.io"),
            Employee::new("002", "", "123-4567-8901", "", "b@y.co"),
        ])
        .unwrap();

        assert_eq!(
            fs::read_to_string(data_file(&temp_dir)).unwrap(),
            "001,Al,12-345-6789,Clerk,al@x.io\n002,,123-4567-8901,,b@y.co\n"
        );
    }

    #[test]
    fn test_save_empty_truncates() {
        let (temp_dir, repo) = create_test_repo();
        repo.save_all(&[employee("001", "Al")]).unwrap();
        repo.save_all(&[]).unwrap();

        assert_eq!(fs::read_to_string(data_file(&temp_dir)).unwrap(), "");
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(
            data_file(&temp_dir),
            "001,Al,12-345-6789,Clerk,al@x.io\n002,Bea,12-345-6789,Clerk\n",
        )
        .unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "001");
    }

    #[test]
    fn test_load_report_counts_skipped() {
        let (temp_dir, repo) = create_test_repo();
        fs::write(
            data_file(&temp_dir),
            "001,Al,12-345-6789,Clerk,al@x.io\n\nbroken\n003,C,12-345-6789,Dev,c@x.io,extra\n",
        )
        .unwrap();

        let report = repo.load_all_with_report().unwrap();
        assert_eq!(report.employees.len(), 1);
        assert_eq!(report.skipped_lines, 3);
    }

    #[test]
    fn test_find_by_id() {
        let employees = vec![employee("001", "Al"), employee("002", "Bea")];

        assert_eq!(find_by_id(&employees, "002").unwrap().name, "Bea");
        assert!(find_by_id(&employees, "003").is_none());
    }

    #[test]
    fn test_find_by_id_returns_first_match() {
        let employees = vec![employee("001", "First"), employee("001", "Second")];
        assert_eq!(find_by_id(&employees, "001").unwrap().name, "First");
    }

    #[test]
    fn test_insert_appends() {
        let mut employees = vec![employee("002", "Bea")];
        insert(&mut employees, employee("001", "Al"));

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[1].id, "001");
    }

    #[test]
    fn test_update() {
        let mut employees = vec![employee("001", "Al")];
        let patch = EmployeePatch {
            position: "Manager".into(),
            ..EmployeePatch::default()
        };

        assert!(update(&mut employees, "001", &patch));
        assert_eq!(employees[0].position, "Manager");
        assert_eq!(employees[0].name, "Al");

        assert!(!update(&mut employees, "999", &patch));
    }

    #[test]
    fn test_delete() {
        let mut employees = vec![employee("001", "Al"), employee("002", "Bea")];

        let removed = delete(&mut employees, "001").unwrap();
        assert_eq!(removed.name, "Al");
        assert_eq!(employees.len(), 1);

        assert!(delete(&mut employees, "001").is_none());
        assert_eq!(employees.len(), 1);
    }
}
