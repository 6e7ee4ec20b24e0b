//! Interactive shell
//!
//! The numbered menu loop that reads choices from the terminal and hands
//! them to the employee service.

pub mod menu;

pub use menu::{Console, Menu, MenuChoice};
