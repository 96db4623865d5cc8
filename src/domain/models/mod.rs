pub mod config;

pub use config::{
    ColorMode, Config, DateLocale, DisplayConfig, LogFormat, LoggingConfig, RotationPolicy,
};
