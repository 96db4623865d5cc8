//! Implementation of the `novel-writer progress` command.

use anyhow::Result;
use clap::Args;
use std::io::Write;

use crate::cli::display::Printer;
use crate::domain::models::DisplayConfig;

#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Completed amount
    pub current: f64,

    /// Total amount
    pub total: f64,

    /// Label in front of the bar (defaults to the configured progress label)
    #[arg(short, long)]
    pub label: Option<String>,
}

pub fn execute<W: Write>(
    args: &ProgressArgs,
    printer: &mut Printer<W>,
    display: &DisplayConfig,
) -> Result<()> {
    if args.total == 0.0 {
        tracing::debug!(current = args.current, "rendering progress with zero total");
    }

    let label = args.label.as_deref().unwrap_or(&display.progress_label);
    printer.progress(args.current, args.total, Some(label))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::display::Theme;

    #[test]
    fn test_uses_configured_label() {
        let mut printer = Printer::new(Vec::new(), Theme::plain());
        let display = DisplayConfig {
            progress_label: "progress".to_string(),
            ..DisplayConfig::default()
        };
        let args = ProgressArgs {
            current: 3.0,
            total: 4.0,
            label: None,
        };
        execute(&args, &mut printer, &display).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert!(out.starts_with("progress: "));
        assert!(out.ends_with("75% (3/4)\n"));
    }

    #[test]
    fn test_explicit_label_wins() {
        let mut printer = Printer::new(Vec::new(), Theme::plain());
        let args = ProgressArgs {
            current: 1.0,
            total: 2.0,
            label: Some("第一卷".to_string()),
        };
        execute(&args, &mut printer, &DisplayConfig::default()).unwrap();
        let out = String::from_utf8(printer.into_inner()).unwrap();
        assert!(out.starts_with("第一卷: "));
    }
}
