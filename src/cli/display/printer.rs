//! Writes rendered output to a terminal or any other writer.
//!
//! Every method composes its complete output first and hands it to the
//! writer in a single `write_all`, so consecutive calls appear in call order
//! and never interleave partially.

use super::progress::{render_progress, Progress, DEFAULT_LABEL};
use super::status::{
    render_banner, render_key_value, render_list, render_section, render_separator,
    render_status, StatusKind,
};
use super::table::render_table;
use super::theme::Theme;
use std::io::{self, Stdout, Write};

/// Terminal reset sequence (RIS)
pub const CLEAR_SEQUENCE: &[u8] = b"\x1bc";

/// Printer bound to a writer and a theme
pub struct Printer<W: Write> {
    out: W,
    theme: Theme,
}

impl Printer<Stdout> {
    /// Printer writing to standard output
    pub fn stdout(theme: Theme) -> Self {
        Self::new(io::stdout(), theme)
    }
}

impl<W: Write> Printer<W> {
    /// Create a printer over any writer
    pub const fn new(out: W, theme: Theme) -> Self {
        Self { out, theme }
    }

    /// Theme used for rendering
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Consume the printer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the banner and version footer
    pub fn banner(&mut self) -> io::Result<()> {
        let lines = render_banner(&self.theme);
        self.emit_lines(lines)
    }

    /// Print a progress bar line, labelled `进度` when `label` is `None`
    pub fn progress(&mut self, current: f64, total: f64, label: Option<&str>) -> io::Result<()> {
        let line = render_progress(
            &self.theme,
            &Progress::new(current, total),
            label.unwrap_or(DEFAULT_LABEL),
        );
        self.emit_lines([line])
    }

    /// Print a line of text unstyled
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        self.emit_lines([text.to_string()])
    }

    /// Print a success line
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        self.status(StatusKind::Success, message)
    }

    /// Print an error line
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        self.status(StatusKind::Error, message)
    }

    /// Print a warning line
    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        self.status(StatusKind::Warning, message)
    }

    /// Print an info line
    pub fn info(&mut self, message: &str) -> io::Result<()> {
        self.status(StatusKind::Info, message)
    }

    /// Print a status line of any kind
    pub fn status(&mut self, kind: StatusKind, message: &str) -> io::Result<()> {
        let line = render_status(&self.theme, kind, message);
        self.emit_lines([line])
    }

    /// Print `key: value`
    pub fn key_value(&mut self, key: &str, value: &str) -> io::Result<()> {
        let line = render_key_value(&self.theme, key, value);
        self.emit_lines([line])
    }

    /// Print each item on its own line, numbered or bulleted
    pub fn list<S: AsRef<str>>(&mut self, items: &[S], numbered: bool) -> io::Result<()> {
        let lines = render_list(&self.theme, items, numbered);
        self.emit_lines(lines)
    }

    /// Print a section header
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        let line = render_section(&self.theme, title);
        self.emit_lines([line])
    }

    /// Print a separator line
    pub fn separator(&mut self) -> io::Result<()> {
        let line = render_separator(&self.theme);
        self.emit_lines([line])
    }

    /// Print a box-drawn table
    pub fn table<H, R, C>(&mut self, headers: &[H], rows: &[R]) -> io::Result<()>
    where
        H: AsRef<str>,
        R: AsRef<[C]>,
        C: AsRef<str>,
    {
        let lines = render_table(&self.theme, headers, rows);
        self.emit_lines(lines)
    }

    /// Reset the terminal display
    pub fn clear(&mut self) -> io::Result<()> {
        self.out.write_all(CLEAR_SEQUENCE)?;
        self.out.flush()
    }

    fn emit_lines<I: IntoIterator<Item = String>>(&mut self, lines: I) -> io::Result<()> {
        let mut buf = String::new();
        for line in lines {
            buf.push_str(&line);
            buf.push('\n');
        }
        if buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(buf.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writer that records every write call separately
    #[derive(Default)]
    struct RecordingWriter {
        writes: Vec<Vec<u8>>,
    }

    impl Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.writes.push(buf.to_vec());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn printer() -> Printer<Vec<u8>> {
        Printer::new(Vec::new(), Theme::plain())
    }

    fn output(printer: Printer<Vec<u8>>) -> String {
        String::from_utf8(printer.into_inner()).unwrap()
    }

    #[test]
    fn test_clear_is_single_write() {
        let mut printer = Printer::new(RecordingWriter::default(), Theme::plain());
        printer.clear().unwrap();
        let writes = printer.into_inner().writes;
        assert_eq!(writes, vec![b"\x1bc".to_vec()]);
    }

    #[test]
    fn test_table_is_single_write() {
        let mut printer = Printer::new(RecordingWriter::default(), Theme::plain());
        printer.table(&["A", "BB"], &[vec!["1", "22"]]).unwrap();
        let writes = printer.into_inner().writes;
        assert_eq!(writes.len(), 1);
        let text = String::from_utf8(writes[0].clone()).unwrap();
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_progress_default_label() {
        let mut p = printer();
        p.progress(5.0, 10.0, None).unwrap();
        let out = output(p);
        assert!(out.starts_with("进度: "));
        assert!(out.ends_with("50% (5/10)\n"));
    }

    #[test]
    fn test_progress_custom_label() {
        let mut p = printer();
        p.progress(1.0, 4.0, Some("章节")).unwrap();
        assert!(output(p).starts_with("章节: "));
    }

    #[test]
    fn test_calls_appear_in_order() {
        let mut p = printer();
        p.success("one").unwrap();
        p.error("two").unwrap();
        p.warning("three").unwrap();
        p.info("four").unwrap();
        p.key_value("k", "v").unwrap();
        p.separator().unwrap();
        assert_eq!(
            output(p),
            format!("✓ one\n✗ two\n⚠ three\nℹ four\nk: v\n{}\n", "─".repeat(50))
        );
    }

    #[test]
    fn test_list_numbered() {
        let mut p = printer();
        p.list(&["a", "b"], true).unwrap();
        assert_eq!(output(p), "1. a\n2. b\n");
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let mut printer = Printer::new(RecordingWriter::default(), Theme::plain());
        let items: Vec<String> = Vec::new();
        printer.list(&items, false).unwrap();
        assert!(printer.into_inner().writes.is_empty());
    }

    #[test]
    fn test_section_has_leading_blank_line() {
        let mut p = printer();
        p.section("设定").unwrap();
        assert_eq!(output(p), "\n━━━ 设定 ━━━\n");
    }

    #[test]
    fn test_banner() {
        let mut p = printer();
        p.banner().unwrap();
        let out = output(p);
        assert!(out.contains("╔"));
        assert!(out.contains("版本"));
    }
}
