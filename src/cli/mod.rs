//! Command-line interface: argument types, commands and terminal display.

pub mod commands;
pub mod display;
pub mod types;

pub use types::{Cli, Commands};

use console::style;

/// Report a failed command on stderr
pub fn handle_error(err: &anyhow::Error) {
    tracing::error!(error = %err, "command failed");
    eprintln!("{} {:#}", style("✗").red().bold().for_stderr(), err);
}
