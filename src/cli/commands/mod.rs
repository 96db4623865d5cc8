//! CLI command implementations.

pub mod format;
pub mod progress;
pub mod status;
pub mod table;

use anyhow::Result;
use std::io::Write;

use crate::cli::display::{Printer, StatusKind};
use crate::cli::types::Commands;
use crate::domain::models::Config;

/// Run one command against the printer
pub fn execute<W: Write>(command: Commands, printer: &mut Printer<W>, config: &Config) -> Result<()> {
    match command {
        Commands::Banner => printer.banner()?,
        Commands::Progress(args) => progress::execute(&args, printer, &config.display)?,
        Commands::Success(args) => status::execute_status(StatusKind::Success, &args, printer)?,
        Commands::Error(args) => status::execute_status(StatusKind::Error, &args, printer)?,
        Commands::Warning(args) => status::execute_status(StatusKind::Warning, &args, printer)?,
        Commands::Info(args) => status::execute_status(StatusKind::Info, &args, printer)?,
        Commands::Kv(args) => status::execute_key_value(&args, printer)?,
        Commands::List(args) => status::execute_list(&args, printer)?,
        Commands::Section(args) => status::execute_section(&args, printer)?,
        Commands::Separator => printer.separator()?,
        Commands::Table(args) => table::execute(&args, printer)?,
        Commands::Words(args) => format::execute_words(&args, printer)?,
        Commands::Date(args) => format::execute_date(&args, printer, &config.display)?,
        Commands::Clear => printer.clear()?,
    }
    Ok(())
}
