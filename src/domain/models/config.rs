use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Novel Writer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Terminal display configuration
    #[serde(default)]
    pub display: DisplayConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DisplayConfig {
    /// When to emit ANSI colors: auto, always, never
    #[serde(default)]
    pub color: ColorMode,

    /// Regional convention used by the date formatters
    #[serde(default)]
    pub date_locale: DateLocale,

    /// Label printed in front of progress bars when the caller gives none
    #[serde(default = "default_progress_label")]
    pub progress_label: String,
}

fn default_progress_label() -> String {
    "进度".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            date_locale: DateLocale::default(),
            progress_label: default_progress_label(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (if None logs only go to stderr)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Log file rotation policy, only used with `log_dir`
    #[serde(default)]
    pub rotation: RotationPolicy,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    #[default]
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

/// Color output policy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the terminal allows it and `NO_COLOR` is unset
    #[default]
    Auto,
    /// Always emit escape sequences, even when piped
    Always,
    /// Never emit escape sequences
    Never,
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            _ => Err(format!(
                "invalid color mode '{s}': expected auto, always or never"
            )),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Always => write!(f, "always"),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Regional date convention
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateLocale {
    /// Simplified Chinese: `2024/01/05 14:30`
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    /// US English: `01/05/2024, 02:30 PM`
    #[serde(rename = "en-US")]
    EnUs,
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "zh-cn" => Ok(Self::ZhCn),
            "en-us" => Ok(Self::EnUs),
            _ => Err(format!("unsupported date locale '{s}': expected zh-CN or en-US")),
        }
    }
}

impl fmt::Display for DateLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZhCn => write!(f, "zh-CN"),
            Self::EnUs => write!(f, "en-US"),
        }
    }
}
