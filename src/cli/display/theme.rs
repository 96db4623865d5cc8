//! Color theme passed explicitly to every renderer.
//!
//! There is no global color state: each render call receives the `Theme` it
//! should use, so tests render with [`Theme::plain`] and the CLI builds one
//! from the configured [`ColorMode`].

use crate::domain::models::ColorMode;
use console::Style;
use std::env;

/// Named style slots used by the display helpers
#[derive(Debug, Clone)]
pub struct Theme {
    /// Borders, progress bar, banner (cyan)
    pub accent: Style,
    /// Section headers (cyan bold)
    pub accent_bold: Style,
    /// De-emphasized text: keys, list prefixes, separators (gray)
    pub muted: Style,
    /// Message bodies and values (white)
    pub body: Style,
    /// Percentages (yellow)
    pub highlight: Style,
    /// Success marker (green)
    pub success: Style,
    /// Error marker (red)
    pub error: Style,
    /// Warning marker (yellow)
    pub warning: Style,
    /// Info marker (blue)
    pub info: Style,
}

impl Theme {
    /// Build the colored theme for the given color mode
    pub fn colored(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Never => Self::plain(),
            ColorMode::Always => Self::styled(true),
            ColorMode::Auto => {
                if supports_color() {
                    Self::styled(false)
                } else {
                    Self::plain()
                }
            }
        }
    }

    /// Theme without any styling
    pub fn plain() -> Self {
        Self {
            accent: Style::new(),
            accent_bold: Style::new(),
            muted: Style::new(),
            body: Style::new(),
            highlight: Style::new(),
            success: Style::new(),
            error: Style::new(),
            warning: Style::new(),
            info: Style::new(),
        }
    }

    fn styled(force: bool) -> Self {
        let base = || {
            if force {
                Style::new().force_styling(true)
            } else {
                Style::new()
            }
        };

        Self {
            accent: base().cyan(),
            accent_bold: base().cyan().bold(),
            muted: base().black().bright(),
            body: base().white(),
            highlight: base().yellow(),
            success: base().green(),
            error: base().red(),
            warning: base().yellow(),
            info: base().blue(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored(ColorMode::Auto)
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}
