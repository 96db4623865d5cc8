//! Box-drawn table rendering sized by display width.
//!
//! Column width is the widest of the header and every cell in that column,
//! plus two cells of padding. Rows shorter than the header render missing
//! cells as empty; cells past the header count are ignored.

use super::theme::Theme;
use super::width::{display_width, pad};
use serde::{Deserialize, Serialize};

const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Extra cells added to each column's content width
pub const COLUMN_PADDING: usize = 2;

/// Header labels plus rows of cells aligned to them by position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column labels
    pub headers: Vec<String>,
    /// Data rows, may be ragged
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given headers
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row of cells
    #[must_use]
    pub fn with_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_row(cells);
        self
    }

    /// Append a row of cells in place
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Column widths including padding
    pub fn column_widths(&self) -> Vec<usize> {
        column_widths(&self.headers, &self.rows)
    }

    /// Render every line of the table
    pub fn render(&self, theme: &Theme) -> Vec<String> {
        render_table(theme, &self.headers, &self.rows)
    }
}

/// Compute each column's width from its header and cells
pub fn column_widths<H, R, C>(headers: &[H], rows: &[R]) -> Vec<usize>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let widest_cell = rows
                .iter()
                .map(|row| display_width(cell_at(row.as_ref(), index)))
                .max()
                .unwrap_or(0);
            display_width(header.as_ref()).max(widest_cell) + COLUMN_PADDING
        })
        .collect()
}

/// Render a table as lines: top border, header, separator, rows, bottom border
///
/// # Example
/// ```
/// use novel_writer::cli::display::{render_table, Theme};
///
/// let lines = render_table(&Theme::plain(), &["A", "BB"], &[vec!["1", "22"]]);
/// assert_eq!(lines[0], "┌───┬────┐");
/// assert_eq!(lines[1], "│ A │ BB │");
/// ```
pub fn render_table<H, R, C>(theme: &Theme, headers: &[H], rows: &[R]) -> Vec<String>
where
    H: AsRef<str>,
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let widths = column_widths(headers, rows);
    let mut lines = Vec::with_capacity(rows.len() + 4);

    lines.push(border(theme, &widths, '┌', '┬', '┐'));
    lines.push(content_line(
        theme,
        &widths,
        headers.iter().map(AsRef::as_ref),
    ));
    lines.push(border(theme, &widths, '├', '┼', '┤'));

    for row in rows {
        let row = row.as_ref();
        lines.push(content_line(
            theme,
            &widths,
            (0..widths.len()).map(|index| cell_at(row, index)),
        ));
    }

    lines.push(border(theme, &widths, '└', '┴', '┘'));
    lines
}

fn cell_at<C: AsRef<str>>(row: &[C], index: usize) -> &str {
    row.get(index).map_or("", AsRef::as_ref)
}

fn border(theme: &Theme, widths: &[usize], left: char, junction: char, right: char) -> String {
    let segments: Vec<String> = widths.iter().map(|w| HORIZONTAL.repeat(*w)).collect();
    let rule = format!("{left}{}{right}", segments.join(junction.to_string().as_str()));
    theme.accent.apply_to(rule).to_string()
}

fn content_line<'a>(
    theme: &Theme,
    widths: &[usize],
    cells: impl Iterator<Item = &'a str>,
) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    let edge = theme.accent.apply_to(VERTICAL);
    format!("{edge}{}{edge}", padded.join(VERTICAL))
}
