//! Append-only audit log writer

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{RosterError, RosterResult};

use super::entry::AuditEntry;

/// Writes audit entries as JSON lines, one entry per line
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it immediately
    pub fn log(&self, entry: &AuditEntry) -> RosterResult<()> {
        let line = serde_json::to_string(entry)
            .map_err(|e| RosterError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RosterError::Io(format!("Failed to open audit log: {}", e)))?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| RosterError::Io(format!("Failed to write audit entry: {}", e)))
    }

    /// Read every entry back, oldest first
    ///
    /// A missing log is empty; a line that isn't a valid entry is an error.
    pub fn read_all(&self) -> RosterResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| RosterError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                RosterError::Io(format!("Failed to read audit log line {}: {}", index + 1, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry = serde_json::from_str(&line).map_err(|e| {
                RosterError::Json(format!("Bad audit entry at line {}: {}", index + 1, e))
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::Employee;
    use tempfile::TempDir;

    fn employee(id: &str) -> Employee {
        Employee::new(id, "Ada", "12-345-6789", "Engineer", "ada@example.com")
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("roster-audit.log"));

        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_appends_one_line_per_entry() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster-audit.log");
        let logger = AuditLogger::new(path.clone());

        logger.log(&AuditEntry::added(&employee("001"))).unwrap();
        logger.log(&AuditEntry::added(&employee("002"))).unwrap();
        logger.log(&AuditEntry::removed(&employee("001"))).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap().lines().count(), 3);

        // A fresh logger on the same file sees everything
        let entries = AuditLogger::new(path).read_all().unwrap();
        let summary: Vec<_> = entries
            .iter()
            .map(|e| (e.operation, e.employee_id.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Operation::Create, "001"),
                (Operation::Create, "002"),
                (Operation::Delete, "001"),
            ]
        );
    }

    #[test]
    fn test_corrupt_line_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster-audit.log");
        std::fs::write(&path, "{not json}\n").unwrap();

        assert!(matches!(
            AuditLogger::new(path).read_all(),
            Err(RosterError::Json(_))
        ));
    }

    #[test]
    fn test_unwritable_log_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster-audit.log");
        std::fs::create_dir(&path).unwrap();

        let err = AuditLogger::new(path)
            .log(&AuditEntry::added(&employee("001")))
            .unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}
