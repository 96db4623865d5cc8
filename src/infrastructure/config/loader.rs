use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Directory holding project configuration
pub const CONFIG_DIR: &str = ".novel-writer";

/// Prefix for environment overrides, `__` separates nested keys
pub const ENV_PREFIX: &str = "NOVEL_WRITER_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Progress label cannot be empty")]
    EmptyProgressLabel,

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the current directory
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .novel-writer/config.yaml (project config)
    /// 3. .novel-writer/local.yaml (project local overrides, optional)
    /// 4. Environment variables (NOVEL_WRITER_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        Self::load_in(Path::new("."))
    }

    /// Load configuration rooted at `project_dir`
    pub fn load_in(project_dir: impl AsRef<Path>) -> Result<Config> {
        let config_dir = project_dir.as_ref().join(CONFIG_DIR);
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(config_dir.join("config.yaml")))
            .merge(Yaml::file(config_dir.join("local.yaml")))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        tracing::debug!(dir = %config_dir.display(), "configuration loaded");
        Ok(config)
    }

    /// Load configuration from a specific file, still honoring env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::ValidationFailed(format!(
                "config file {} does not exist",
                path.display()
            )))
            .context("Failed to load configuration");
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        if config.display.progress_label.trim().is_empty() {
            return Err(ConfigError::EmptyProgressLabel);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ColorMode, DateLocale, LogFormat};
    use std::fs;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn write_project_file(dir: &TempDir, name: &str, contents: &str) {
        let config_dir = dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(name), contents).unwrap();
    }

    #[test]
    fn test_default_config_is_valid() {
        ConfigLoader::validate(&Config::default()).expect("Default config should be valid");
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
display:
  color: never
  date_locale: en-US
  progress_label: progress
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.display.color, ColorMode::Never);
        assert_eq!(config.display.date_locale, DateLocale::EnUs);
        assert_eq!(config.display.progress_label, "progress");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = Config::default();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config).unwrap_err() {
            ConfigError::InvalidLogLevel(level) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_progress_label() {
        let mut config = Config::default();
        config.display.progress_label = "  ".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyProgressLabel)
        ));
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let dir = TempDir::new().unwrap();
        temp_env::with_vars_unset(
            ["NOVEL_WRITER_DISPLAY__COLOR", "NOVEL_WRITER_LOGGING__LEVEL"],
            || {
                let config = ConfigLoader::load_in(dir.path()).unwrap();
                assert_eq!(config.display.color, ColorMode::Auto);
                assert_eq!(config.logging.level, "warn");
            },
        );
    }

    #[test]
    fn test_hierarchical_merging() {
        let dir = TempDir::new().unwrap();
        write_project_file(
            &dir,
            "config.yaml",
            "display:\n  color: always\n  progress_label: 完成度\nlogging:\n  level: info",
        );
        write_project_file(&dir, "local.yaml", "logging:\n  level: debug");

        temp_env::with_vars_unset(
            ["NOVEL_WRITER_DISPLAY__COLOR", "NOVEL_WRITER_LOGGING__LEVEL"],
            || {
                let config = ConfigLoader::load_in(dir.path()).unwrap();
                assert_eq!(config.logging.level, "debug", "Local override should win");
                assert_eq!(
                    config.display.color,
                    ColorMode::Always,
                    "Base value should persist when not overridden"
                );
                assert_eq!(config.display.progress_label, "完成度");
            },
        );
    }

    #[test]
    fn test_env_override() {
        let dir = TempDir::new().unwrap();
        write_project_file(&dir, "config.yaml", "display:\n  color: always");

        temp_env::with_vars(
            [
                ("NOVEL_WRITER_DISPLAY__COLOR", Some("never")),
                ("NOVEL_WRITER_LOGGING__LEVEL", Some("error")),
            ],
            || {
                let config = ConfigLoader::load_in(dir.path()).unwrap();
                assert_eq!(config.display.color, ColorMode::Never);
                assert_eq!(config.logging.level, "error");
            },
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "display:\n  date_locale: en-US").unwrap();
        file.flush().unwrap();

        temp_env::with_vars_unset(["NOVEL_WRITER_DISPLAY__DATE_LOCALE"], || {
            let config = ConfigLoader::load_from_file(file.path()).unwrap();
            assert_eq!(config.display.date_locale, DateLocale::EnUs);
        });
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = ConfigLoader::load_from_file(dir.path().join("missing.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_level() {
        let dir = TempDir::new().unwrap();
        write_project_file(&dir, "config.yaml", "logging:\n  level: loud");

        temp_env::with_vars_unset(["NOVEL_WRITER_LOGGING__LEVEL"], || {
            let err = ConfigLoader::load_in(dir.path()).unwrap_err();
            assert!(err.downcast_ref::<ConfigError>().is_some());
        });
    }
}
