//! Display framework for CLI output formatting.
//!
//! Pure `render_*` functions build styled strings from plain data and an
//! explicit [`Theme`]; [`Printer`] writes them to a terminal. Nothing here
//! fails on degenerate input; only the writer can return an error.

pub mod date;
pub mod format;
pub mod printer;
pub mod progress;
pub mod status;
pub mod table;
pub mod theme;
pub mod width;

pub use date::{format_date, format_date_time, DateFormatter, EnUsDates, ZhCnDates};
pub use format::{format_number, format_word_count};
pub use printer::{Printer, CLEAR_SEQUENCE};
pub use progress::{render_progress, Progress, BAR_LENGTH, DEFAULT_LABEL};
pub use status::{
    render_banner, render_key_value, render_list, render_section, render_separator,
    render_status, StatusKind,
};
pub use table::{column_widths, render_table, Table};
pub use theme::Theme;
pub use width::{char_width, display_width, pad};
