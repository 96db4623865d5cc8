//! Implementation of the `novel-writer words` and `novel-writer date` commands.

use anyhow::Result;
use chrono::{DateTime, FixedOffset, Local};
use clap::Args;
use std::io::Write;

use crate::cli::display::{format_date, format_date_time, format_word_count, Printer};
use crate::domain::models::{DateLocale, DisplayConfig};

#[derive(Args, Debug)]
pub struct WordsArgs {
    /// Number of characters written
    pub count: u64,
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Include hour and minute
    #[arg(short, long)]
    pub time: bool,

    /// Moment to format as RFC 3339 (defaults to now)
    #[arg(long)]
    pub at: Option<DateTime<FixedOffset>>,

    /// Date locale (defaults to the configured locale)
    #[arg(short, long)]
    pub locale: Option<DateLocale>,
}

pub fn execute_words<W: Write>(args: &WordsArgs, printer: &mut Printer<W>) -> Result<()> {
    printer.line(&format_word_count(args.count))?;
    Ok(())
}

pub fn execute_date<W: Write>(
    args: &DateArgs,
    printer: &mut Printer<W>,
    display: &DisplayConfig,
) -> Result<()> {
    let locale = args.locale.unwrap_or(display.date_locale);
    let rendered = match (args.at, args.time) {
        (Some(at), true) => format_date_time(locale, &at),
        (Some(at), false) => format_date(locale, &at),
        (None, true) => format_date_time(locale, &Local::now()),
        (None, false) => format_date(locale, &Local::now()),
    };

    tracing::debug!(%locale, time = args.time, "formatted date");
    printer.line(&rendered)?;
    Ok(())
}
