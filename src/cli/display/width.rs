//! Display width and padding for mixed single/double width text.
//!
//! Width is approximated per character: code points below 256 take one
//! terminal cell, everything else takes two. This is not East Asian Width;
//! table layout depends on exactly this rule, so keep it.

/// Width of a single character under the one-or-two cell rule
pub const fn char_width(c: char) -> usize {
    if (c as u32) < 256 {
        1
    } else {
        2
    }
}

/// Approximate number of terminal cells `s` occupies
///
/// # Example
/// ```
/// use novel_writer::cli::display::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("小说"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Pad `s` to `width` cells: one leading space, then `s`, then trailing
/// spaces for whatever is left.
///
/// When `s` is already `width` cells or wider the result is `" " + s` and
/// may overflow the column.
pub fn pad(s: &str, width: usize) -> String {
    let trailing = width.saturating_sub(display_width(s)).saturating_sub(1);
    let mut padded = String::with_capacity(s.len() + trailing + 1);
    padded.push(' ');
    padded.push_str(s);
    padded.extend(std::iter::repeat_n(' ', trailing));
    padded
}
