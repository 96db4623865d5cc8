//! Novel Writer - terminal display helpers
//!
//! Presentation utilities for the Novel Writer command-line tool: banner,
//! progress bars, box-drawn tables, colored status lines, key-value and list
//! output, and word-count and date formatting.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Configuration model
//! - **Infrastructure Layer** (`infrastructure`): Config loading and logging
//! - **CLI Layer** (`cli`): Display rendering, printer and commands
//!
//! # Example
//!
//! ```
//! use novel_writer::cli::display::{Printer, Theme};
//!
//! let mut printer = Printer::new(Vec::new(), Theme::plain());
//! printer.table(&["章节", "字数"], &[vec!["序章", "3000"]]).unwrap();
//! printer.progress(5.0, 10.0, None).unwrap();
//!
//! let out = String::from_utf8(printer.into_inner()).unwrap();
//! assert!(out.contains("│ 序章 │ 3000 │"));
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use cli::display::{
    display_width, format_word_count, pad, render_table, DateFormatter, Printer, Progress, Table,
    Theme,
};
pub use domain::models::{ColorMode, Config, DateLocale, DisplayConfig, LoggingConfig};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::logging::LoggerImpl;
