//! Numbered menu loop
//!
//! Generic over its input and output so the whole session can be driven
//! from a byte buffer in tests.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::display::outcome_lines;
use crate::error::{RosterError, RosterResult};
use crate::services::{EmployeeService, Prompter};
use crate::storage::Storage;

const MENU: &str = "\
Employee Management System
1. Add Employee
2. List Employees
3. View Employee
4. Edit Employee
5. Delete Employee
6. Exit";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    View,
    Edit,
    Delete,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::View),
            "4" => Ok(Self::Edit),
            "5" => Ok(Self::Delete),
            "6" => Ok(Self::Exit),
            other => Err(RosterError::Validation(format!(
                "unknown menu choice '{}'",
                other
            ))),
        }
    }
}

/// Line-oriented terminal: prompts go to `output`, answers come from `input`
pub struct Console<R, W> {
    input: R,
    output: W,
    eof: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            eof: false,
        }
    }

    /// Whether the input has been exhausted
    pub fn at_eof(&self) -> bool {
        self.eof
    }

    /// Print one line
    pub fn say(&mut self, line: &str) -> RosterResult<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> RosterResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            self.eof = true;
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn ask(&mut self, prompt: &str) -> RosterResult<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        self.read_line()
    }

    fn note(&mut self, message: &str) -> RosterResult<()> {
        self.say(message)
    }
}

/// The interactive menu session
pub struct Menu<'a, R, W> {
    service: EmployeeService<'a>,
    console: Console<R, W>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(storage: &'a Storage, input: R, output: W) -> Self {
        Self {
            service: EmployeeService::new(storage),
            console: Console::new(input, output),
        }
    }

    /// Run until the user picks Exit or input runs out
    ///
    /// Storage failures end the session with an error.
    pub fn run(&mut self) -> RosterResult<()> {
        loop {
            self.console.say("")?;
            self.console.say(MENU)?;
            let answer = self.console.ask("Enter your choice: ")?;

            if self.console.at_eof() && answer.is_empty() {
                self.console.say("")?;
                return Ok(());
            }

            let Ok(choice) = answer.parse::<MenuChoice>() else {
                self.console.say("Invalid choice! Please try again.")?;
                continue;
            };

            let outcome = match choice {
                MenuChoice::Add => self.service.add(&mut self.console)?,
                MenuChoice::List => self.service.list()?,
                MenuChoice::View => self.service.view(&mut self.console)?,
                MenuChoice::Edit => self.service.edit(&mut self.console)?,
                MenuChoice::Delete => self.service.delete(&mut self.console)?,
                MenuChoice::Exit => {
                    self.console.say("Exiting...")?;
                    return Ok(());
                }
            };
            for line in outcome_lines(&outcome) {
                self.console.say(&line)?;
            }
        }
    }
}
