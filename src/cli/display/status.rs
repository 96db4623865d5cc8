//! Status lines, key-value pairs, lists and decorative lines.

use super::theme::Theme;
use console::Style;

const SEPARATOR_WIDTH: usize = 50;
const SECTION_RULE: &str = "━━━";

const BANNER: &str = "
╔═══════════════════════════════════════╗
║                                       ║
║     📚  Novel Writer  📝              ║
║                                       ║
║     AI 驱动的中文小说创作工具        ║
║                                       ║
╚═══════════════════════════════════════╝
";

/// Kind of one-line status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// `✓` in green
    Success,
    /// `✗` in red
    Error,
    /// `⚠` in yellow
    Warning,
    /// `ℹ` in blue
    Info,
}

impl StatusKind {
    /// Marker printed before the message
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    fn style(self, theme: &Theme) -> &Style {
        match self {
            Self::Success => &theme.success,
            Self::Error => &theme.error,
            Self::Warning => &theme.warning,
            Self::Info => &theme.info,
        }
    }
}

/// Render `<marker> <message>`
pub fn render_status(theme: &Theme, kind: StatusKind, message: &str) -> String {
    format!(
        "{}{}",
        kind.style(theme).apply_to(format!("{} ", kind.symbol())),
        theme.body.apply_to(message)
    )
}

/// Render `key: value` with the key de-emphasized
pub fn render_key_value(theme: &Theme, key: &str, value: &str) -> String {
    format!(
        "{}{}",
        theme.muted.apply_to(format!("{key}: ")),
        theme.body.apply_to(value)
    )
}

/// Render one line per item, prefixed `1. ` when numbered or `• ` otherwise
pub fn render_list<S: AsRef<str>>(theme: &Theme, items: &[S], numbered: bool) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let prefix = if numbered {
                format!("{}. ", index + 1)
            } else {
                "• ".to_string()
            };
            format!("{}{}", theme.muted.apply_to(prefix), item.as_ref())
        })
        .collect()
}

/// Render a section header preceded by a blank line
pub fn render_section(theme: &Theme, title: &str) -> String {
    let header = format!("{SECTION_RULE} {title} {SECTION_RULE}");
    format!("\n{}", theme.accent_bold.apply_to(header))
}

/// Render a horizontal separator line
pub fn render_separator(theme: &Theme) -> String {
    theme
        .muted
        .apply_to("─".repeat(SEPARATOR_WIDTH))
        .to_string()
}

/// Render the product banner followed by the version footer
pub fn render_banner(theme: &Theme) -> Vec<String> {
    let footer = format!(
        "  版本: {} | 作者: Novel Writer Team\n",
        env!("CARGO_PKG_VERSION")
    );
    vec![
        theme.accent.apply_to(BANNER).to_string(),
        theme.muted.apply_to(footer).to_string(),
    ]
}
