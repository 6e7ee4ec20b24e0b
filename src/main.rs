use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use roster::cli::Menu;
use roster::config::{RosterPaths, Settings};
use roster::storage::Storage;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Terminal-based employee roster",
    long_about = "Roster keeps employee records in a plain text file and offers \
                  an interactive menu to add, list, view, edit and delete them."
)]
struct Cli {
    /// Directory holding the data file, settings and audit log
    #[arg(long, env = "ROSTER_DIR")]
    dir: Option<PathBuf>,

    /// Employee data file (overrides the settings)
    #[arg(short, long, env = "ROSTER_FILE")]
    file: Option<PathBuf>,

    /// Don't record changes in the audit log
    #[arg(long)]
    no_audit: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = match cli.dir {
        Some(dir) => RosterPaths::with_base_dir(dir),
        None => RosterPaths::new(),
    };
    if let Some(file) = cli.file {
        paths = paths.with_data_file(file);
    }

    let mut settings = Settings::load_or_create(&paths)?;
    if cli.no_audit {
        settings.audit_enabled = false;
    }

    let storage = Storage::new(paths, &settings)?;

    let stdin = io::stdin();
    let mut menu = Menu::new(&storage, stdin.lock(), io::stdout());
    menu.run()?;

    Ok(())
}
