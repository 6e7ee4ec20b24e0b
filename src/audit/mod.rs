//! Audit logging for the roster
//!
//! Every add, edit and delete is appended to `roster-audit.log` as one JSON
//! object per line, with the record before and after the change.

mod diff;
mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
