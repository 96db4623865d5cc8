//! Single-line progress bar rendering.
//!
//! Unlike a live progress indicator, this renders one static line per call:
//! `进度: ███████████████░░░░░░░░░░░░░░░ 50% (5/10)`.
//!
//! Degenerate input never panics. A zero total yields a non-finite
//! percentage that is printed as-is (`NaN%`, `Infinity%`) with an empty bar,
//! and a current value past the total fills the bar without overflowing it.

use super::format::format_number;
use super::theme::Theme;

/// Number of cells in the bar
pub const BAR_LENGTH: usize = 30;

/// Label used when none is configured or given
pub const DEFAULT_LABEL: &str = "进度";

const FILLED_CHAR: &str = "█";
const EMPTY_CHAR: &str = "░";

/// Progress snapshot for a single render
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Completed amount
    pub current: f64,
    /// Total amount, zero is allowed
    pub total: f64,
}

impl Progress {
    /// Create a progress snapshot
    pub const fn new(current: f64, total: f64) -> Self {
        Self { current, total }
    }

    /// Completion percentage rounded to a whole number, non-finite when `total` is zero
    pub fn percentage(&self) -> f64 {
        (self.current / self.total * 100.0).round()
    }

    /// Number of filled cells, clamped to the bar
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn filled_length(&self) -> usize {
        let filled = (self.percentage() / 100.0 * BAR_LENGTH as f64).round();
        if filled.is_finite() {
            filled.clamp(0.0, BAR_LENGTH as f64) as usize
        } else {
            0
        }
    }

    /// Bar characters without styling; empty when the percentage is not finite
    pub fn bar(&self) -> String {
        if !self.percentage().is_finite() {
            return String::new();
        }
        let filled = self.filled_length();
        format!(
            "{}{}",
            FILLED_CHAR.repeat(filled),
            EMPTY_CHAR.repeat(BAR_LENGTH - filled)
        )
    }
}

/// Render `label: bar pct% (current/total)`
///
/// # Example
/// ```
/// use novel_writer::cli::display::{render_progress, Progress, Theme};
///
/// let line = render_progress(&Theme::plain(), &Progress::new(5.0, 10.0), "进度");
/// assert!(line.ends_with(" 50% (5/10)"));
/// ```
pub fn render_progress(theme: &Theme, progress: &Progress, label: &str) -> String {
    let percent = format!("{}%", format_number(progress.percentage()));
    format!(
        "{label}: {} {} ({}/{})",
        theme.accent.apply_to(progress.bar()),
        theme.highlight.apply_to(percent),
        format_number(progress.current),
        format_number(progress.total)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_progress() {
        let progress = Progress::new(5.0, 10.0);
        assert!((progress.percentage() - 50.0).abs() < f64::EPSILON);
        assert_eq!(progress.filled_length(), 15);
        assert_eq!(progress.bar(), format!("{}{}", "█".repeat(15), "░".repeat(15)));
    }

    #[test]
    fn test_render_half_progress() {
        let line = render_progress(&Theme::plain(), &Progress::new(5.0, 10.0), "进度");
        let expected = format!("进度: {}{} 50% (5/10)", "█".repeat(15), "░".repeat(15));
        assert_eq!(line, expected);
    }

    #[test]
    fn test_percentage_rounds() {
        let progress = Progress::new(1.0, 3.0);
        assert!((progress.percentage() - 33.0).abs() < f64::EPSILON);
        // 33% of 30 cells is 9.9
        assert_eq!(progress.filled_length(), 10);
    }

    #[test]
    fn test_complete_and_empty() {
        assert_eq!(Progress::new(10.0, 10.0).bar(), "█".repeat(BAR_LENGTH));
        assert_eq!(Progress::new(0.0, 10.0).bar(), "░".repeat(BAR_LENGTH));
    }

    #[test]
    fn test_zero_total_prints_nan() {
        let progress = Progress::new(0.0, 0.0);
        assert!(progress.percentage().is_nan());
        assert_eq!(progress.filled_length(), 0);
        assert_eq!(progress.bar(), "");

        let line = render_progress(&Theme::plain(), &progress, "progress");
        assert_eq!(line, "progress:  NaN% (0/0)");
    }

    #[test]
    fn test_zero_total_with_work_prints_infinity() {
        let line = render_progress(&Theme::plain(), &Progress::new(3.0, 0.0), "进度");
        assert_eq!(line, "进度:  Infinity% (3/0)");
    }

    #[test]
    fn test_overflow_is_clamped() {
        let progress = Progress::new(15.0, 10.0);
        assert!((progress.percentage() - 150.0).abs() < f64::EPSILON);
        assert_eq!(progress.filled_length(), BAR_LENGTH);
        assert_eq!(progress.bar().chars().count(), BAR_LENGTH);
    }

    #[test]
    fn test_fractional_values() {
        let line = render_progress(&Theme::plain(), &Progress::new(2.5, 10.0), "p");
        assert!(line.ends_with(" 25% (2.5/10)"));
    }
}
