//! Novel Writer CLI entry point.

use anyhow::Result;
use clap::Parser;

use novel_writer::cli::display::{Printer, Theme};
use novel_writer::cli::{commands, Cli};
use novel_writer::infrastructure::config::ConfigLoader;
use novel_writer::infrastructure::logging::LoggerImpl;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        novel_writer::cli::handle_error(&err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    let _logger = LoggerImpl::init(&config.logging)?;

    let color = cli.color.unwrap_or(config.display.color);
    tracing::debug!(%color, command = ?cli.command, "dispatching command");

    let mut printer = Printer::stdout(Theme::colored(color));
    commands::execute(cli.command, &mut printer, &config)
}
