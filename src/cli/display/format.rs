//! Word-count and number formatters for CLI output.

/// Counts at or above this are shown in units of 万 (ten thousand)
const WAN: u64 = 10_000;

/// Format a word count: `5000字`, or `2.5万字` from ten thousand up.
///
/// The ten-thousands value is rounded to one decimal place; an exact tie
/// (`12500`) rounds up to `1.3万字`.
pub fn format_word_count(count: u64) -> String {
    if count < WAN {
        return format!("{count}字");
    }

    // Exact halves of a tenth are representable in binary and would round to even.
    if count % (WAN / 2) == WAN / 4 {
        let tenths = count / (WAN / 10) + 1;
        return format!("{}.{}万字", tenths / 10, tenths % 10);
    }

    #[allow(clippy::cast_precision_loss)]
    let wan = count as f64 / WAN as f64;
    format!("{wan:.1}万字")
}

/// Shortest decimal form of a number: `5`, `2.5`, `NaN`, `Infinity`
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
