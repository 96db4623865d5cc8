//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::format::{DateArgs, WordsArgs};
use crate::cli::commands::progress::ProgressArgs;
use crate::cli::commands::status::{KeyValueArgs, ListArgs, MessageArgs, SectionArgs};
use crate::cli::commands::table::TableArgs;
use crate::domain::models::ColorMode;

#[derive(Parser, Debug)]
#[command(name = "novel-writer")]
#[command(about = "Novel Writer - terminal display helpers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .novel-writer/config.yaml)
    #[arg(short, long, global = true, env = "NOVEL_WRITER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Color output: auto, always, never (overrides config)
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the Novel Writer banner
    Banner,

    /// Print a progress bar
    Progress(ProgressArgs),

    /// Print a success line
    Success(MessageArgs),

    /// Print an error line
    Error(MessageArgs),

    /// Print a warning line
    Warning(MessageArgs),

    /// Print an info line
    Info(MessageArgs),

    /// Print a key-value line
    Kv(KeyValueArgs),

    /// Print a numbered or bulleted list
    List(ListArgs),

    /// Print a section header
    Section(SectionArgs),

    /// Print a separator line
    Separator,

    /// Print a box-drawn table
    Table(TableArgs),

    /// Format a word count
    Words(WordsArgs),

    /// Format a date or date-time
    Date(DateArgs),

    /// Reset the terminal display
    Clear,
}
