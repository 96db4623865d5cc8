//! Implementation of the `novel-writer table` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::display::{Printer, Table};

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Header labels (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "file")]
    pub headers: Vec<String>,

    /// Data row as comma-separated cells, repeat for more rows
    #[arg(short, long = "row", conflicts_with = "file")]
    pub rows: Vec<String>,

    /// JSON file with `{"headers": [...], "rows": [[...], ...]}`
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

pub fn execute<W: Write>(args: &TableArgs, printer: &mut Printer<W>) -> Result<()> {
    let table = match &args.file {
        Some(path) => load_table(path)?,
        None => table_from_args(args)?,
    };

    tracing::debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "rendering table"
    );

    printer.table(&table.headers, &table.rows)?;
    Ok(())
}

fn table_from_args(args: &TableArgs) -> Result<Table> {
    if args.headers.is_empty() {
        bail!("Either --headers or --file is required");
    }

    let mut table = Table::new(args.headers.iter().cloned());
    for row in &args.rows {
        table.add_row(row.split(','));
    }
    Ok(table)
}

fn load_table(path: &Path) -> Result<Table> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read table file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse table file {}", path.display()))
}
