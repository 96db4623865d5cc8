//! Implementation of the status, key-value, list and decoration commands.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::cli::display::{Printer, StatusKind};

#[derive(Args, Debug)]
pub struct MessageArgs {
    /// Message to print after the marker
    pub message: String,
}

#[derive(Args, Debug)]
pub struct KeyValueArgs {
    /// Key, printed de-emphasized
    pub key: String,

    /// Value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Prefix items with 1-based numbers instead of bullets
    #[arg(short, long)]
    pub numbered: bool,

    /// Items, printed in the given order
    pub items: Vec<String>,
}

#[derive(Args, Debug)]
pub struct SectionArgs {
    /// Section title
    pub title: String,
}

pub fn execute_status<W: Write>(
    kind: StatusKind,
    args: &MessageArgs,
    printer: &mut Printer<W>,
) -> Result<()> {
    printer.status(kind, &args.message)?;
    Ok(())
}

pub fn execute_key_value<W: Write>(args: &KeyValueArgs, printer: &mut Printer<W>) -> Result<()> {
    printer.key_value(&args.key, &args.value)?;
    Ok(())
}

pub fn execute_list<W: Write>(args: &ListArgs, printer: &mut Printer<W>) -> Result<()> {
    printer.list(&args.items, args.numbered)?;
    Ok(())
}

pub fn execute_section<W: Write>(args: &SectionArgs, printer: &mut Printer<W>) -> Result<()> {
    printer.section(&args.title)?;
    Ok(())
}
