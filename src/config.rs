//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::render::{RenderOptions, Skin};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tick schedule configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClockConfig {
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

fn default_tick_interval() -> u64 {
    1000 // 1 second
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval(),
        }
    }
}

/// Presentation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub skin: Skin,

    #[serde(default)]
    pub reduced_motion: bool,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            skin: Skin::default(),
            reduced_motion: false,
            color: default_color(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            file: None,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        Self::load_first(&Self::default_paths())
    }

    /// Load the first existing file in `paths`, falling back to the
    /// environment. Files that fail to load are skipped with a warning.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        // Fall back to environment-only config
        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("kinetic-clock").join("config.toml")),
            Some(PathBuf::from("/etc/kinetic-clock/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup.
    ///
    /// Values that fail to parse are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // Clock overrides
        if let Some(ms) = lookup("KINETIC_CLOCK_TICK_MS") {
            match ms.parse() {
                Ok(ms) => self.clock.tick_interval_ms = ms,
                Err(_) => tracing::warn!("Ignoring invalid KINETIC_CLOCK_TICK_MS: {}", ms),
            }
        }

        // Display overrides
        if let Some(skin) = lookup("KINETIC_CLOCK_SKIN") {
            match skin.parse() {
                Ok(skin) => self.display.skin = skin,
                Err(e) => tracing::warn!("Ignoring KINETIC_CLOCK_SKIN: {}", e),
            }
        }
        if let Some(flag) = lookup("KINETIC_CLOCK_REDUCED_MOTION") {
            match parse_flag(&flag) {
                Some(on) => self.display.reduced_motion = on,
                None => tracing::warn!("Ignoring invalid KINETIC_CLOCK_REDUCED_MOTION: {}", flag),
            }
        }
        if let Some(flag) = lookup("KINETIC_CLOCK_COLOR") {
            match parse_flag(&flag) {
                Some(on) => self.display.color = on,
                None => tracing::warn!("Ignoring invalid KINETIC_CLOCK_COLOR: {}", flag),
            }
        }
        // https://no-color.org: any non-empty value disables color
        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            self.display.color = false;
        }

        // Logging overrides
        if let Some(level) = lookup("KINETIC_CLOCK_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("KINETIC_CLOCK_LOG_FORMAT") {
            self.logging.format = format;
        }
        if let Some(file) = lookup("KINETIC_CLOCK_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    /// Check values serde cannot check on its own
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.clock.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "clock.tick_interval_ms must be greater than 0".to_string(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level '{}' is not one of {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.format '{}' is not one of {}",
                self.logging.format,
                LOG_FORMATS.join(", ")
            )));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.clock.tick_interval_ms)
    }

    /// Render options implied by the display section
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            skin: self.display.skin,
            reduced_motion: self.display.reduced_motion,
            color: self.display.color,
            alternate_screen: false,
            redraw: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Kinetic Clock Configuration
#
# Environment variables override these settings:
# - KINETIC_CLOCK_TICK_MS
# - KINETIC_CLOCK_SKIN
# - KINETIC_CLOCK_REDUCED_MOTION
# - KINETIC_CLOCK_COLOR (NO_COLOR is honored too)
# - KINETIC_CLOCK_LOG_LEVEL
# - KINETIC_CLOCK_LOG_FORMAT
# - KINETIC_CLOCK_LOG_FILE

[clock]
# Milliseconds between ticks
tick_interval_ms = 1000

[display]
# Skin: kinetic (full card), minimal (one line) or json (one object per tick)
skin = "kinetic"

# Freeze blinking separators and the live pulse
reduced_motion = false

# Emit ANSI colors
color = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path. Logs go to stderr otherwise.
# file = "/tmp/kinetic-clock.log"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert_eq!(config.tick_period(), Duration::from_secs(1));
        assert_eq!(config.display.skin, Skin::Kinetic);
        assert!(!config.display.reduced_motion);
        assert!(config.display.color);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.logging.file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert_eq!(config.display.skin, Skin::Kinetic);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[clock]\ntick_interval_ms = 500\n\n[display]\nskin = \"minimal\"\nreduced_motion = true"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.clock.tick_interval_ms, 500);
        assert_eq!(config.display.skin, Skin::Minimal);
        assert!(config.display.reduced_motion);
        // Untouched sections keep defaults
        assert!(config.display.color);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/kinetic-clock.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_skin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[display]\nskin = \"neon\"").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_rejects_zero_interval() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[clock]\ntick_interval_ms = 0").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_validate_log_settings() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("KINETIC_CLOCK_TICK_MS", "250"),
            ("KINETIC_CLOCK_SKIN", "json"),
            ("KINETIC_CLOCK_REDUCED_MOTION", "yes"),
            ("KINETIC_CLOCK_LOG_LEVEL", "debug"),
            ("KINETIC_CLOCK_LOG_FORMAT", "json"),
            ("KINETIC_CLOCK_LOG_FILE", "/tmp/clock.log"),
        ]));

        assert_eq!(config.clock.tick_interval_ms, 250);
        assert_eq!(config.display.skin, Skin::Json);
        assert!(config.display.reduced_motion);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.file.as_deref(), Some("/tmp/clock.log"));
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[
            ("KINETIC_CLOCK_TICK_MS", "soon"),
            ("KINETIC_CLOCK_SKIN", "neon"),
            ("KINETIC_CLOCK_COLOR", "maybe"),
        ]));

        assert_eq!(config.clock.tick_interval_ms, 1000);
        assert_eq!(config.display.skin, Skin::Kinetic);
        assert!(config.display.color);
    }

    #[test]
    fn test_no_color() {
        let mut config = Config::default();
        config.apply_overrides(lookup(&[("NO_COLOR", "")]));
        assert!(config.display.color);

        config.apply_overrides(lookup(&[("NO_COLOR", "1")]));
        assert!(!config.display.color);
    }

    #[test]
    fn test_render_options() {
        let mut config = Config::default();
        config.display.skin = Skin::Minimal;
        config.display.color = false;

        let options = config.render_options();
        assert_eq!(options.skin, Skin::Minimal);
        assert!(!options.color);
        assert!(!options.alternate_screen);
    }
}
