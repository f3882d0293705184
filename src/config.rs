//! Configuration for the `wordnum` binary.
//!
//! Settings are read from `wordnum.toml` (current directory, or `--config-file`)
//! and layered file → environment → CLI.
//!
//! # Configuration File Format
//!
//! ```toml
//! [output]
//! invalid_message = "number invalid"
//!
//! [logging]
//! level = "warn"
//! format = "text"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_INVALID_MESSAGE;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "wordnum.toml";

/// Env var overriding the log format.
pub const LOG_FORMAT_ENV: &str = "WORDNUM_LOG_FORMAT";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// How log lines are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => anyhow::bail!("Invalid log format '{}'. Valid values: text, json", s),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Printed when the input holds no single valid integer
    #[serde(default = "default_invalid_message")]
    pub invalid_message: String,
}

fn default_invalid_message() -> String {
    DEFAULT_INVALID_MESSAGE.to_string()
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            invalid_message: default_invalid_message(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Parsed `wordnum.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordnumToml {
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

impl WordnumToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse wordnum.toml")
    }

    /// Load `path` if it exists, otherwise the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize wordnum.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Return warnings for settings that will not behave as written.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            warnings.push(format!(
                "logging.level '{}' is not one of: {}",
                self.logging.level,
                LOG_LEVELS.join(", ")
            ));
        }

        if self.output.invalid_message.trim().is_empty() {
            warnings.push("output.invalid_message is empty".to_string());
        }

        warnings
    }
}

/// Effective configuration after env and CLI overrides.
#[derive(Debug, Clone)]
pub struct WordnumConfig {
    /// Where the file layer was looked up
    pub config_path: PathBuf,
    /// Parsed file layer (defaults when the file is absent)
    pub toml: WordnumToml,
    /// CLI override: force debug logging
    pub verbose: bool,
}

impl WordnumConfig {
    /// Load from an explicit path, or `wordnum.toml` in `dir`.
    ///
    /// An explicit path must exist; the default one is optional.
    pub fn new(dir: &Path, config_path: Option<PathBuf>) -> Result<Self> {
        let toml = match &config_path {
            Some(path) => WordnumToml::load(path)?,
            None => WordnumToml::load_or_default(&dir.join(CONFIG_FILE_NAME))?,
        };
        let config_path = config_path.unwrap_or_else(|| dir.join(CONFIG_FILE_NAME));

        Ok(Self {
            config_path,
            toml,
            verbose: false,
        })
    }

    /// Create a WordnumConfig with CLI overrides.
    pub fn with_cli_args(dir: &Path, config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let mut config = Self::new(dir, config_path)?;
        config.verbose = verbose;
        Ok(config)
    }

    /// Filter directive when `WORDNUM_LOG` is unset (CLI → file).
    pub fn log_level(&self) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            self.toml.logging.level.to_lowercase()
        }
    }

    /// Log format (env → file).
    pub fn log_format(&self) -> LogFormat {
        std::env::var(LOG_FORMAT_ENV)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.toml.logging.format)
    }

    pub fn invalid_message(&self) -> &str {
        &self.toml.output.invalid_message
    }

    pub fn validate(&self) -> Vec<String> {
        self.toml.validate()
    }
}
