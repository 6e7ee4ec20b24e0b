//! Roster - terminal-based employee roster
//!
//! Keeps a list of employees in a plain text file, one comma-separated line
//! per employee, and offers an interactive menu to add, list, view, edit and
//! delete them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and settings
//! - `error`: Custom error types
//! - `models`: The employee record and field validators
//! - `storage`: Plain text file storage layer
//! - `services`: One handler per menu action
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: The interactive menu loop
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::config::{RosterPaths, Settings};
//! use roster::storage::Storage;
//!
//! let paths = RosterPaths::new();
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! let employees = storage.employees.load_all()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{RosterError, RosterResult};
