//! Configuration settings for task-intent.
//!
//! Settings are loaded from `~/.task-intent/config.yaml`.

use std::borrow::Cow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::IntentError;
use crate::features::nlp::{IntentParser, KeywordTable, Locale};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Parser settings.
    pub parser: ParserConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to all `colored` output of this process.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Parser settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParserConfig {
    /// Built-in keyword table to use.
    pub locale: Locale,
    /// Custom keyword table, overriding `locale`.
    ///
    /// Relative paths are resolved against `~/.task-intent/keywords/`.
    pub keywords_file: Option<PathBuf>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl ParserConfig {
    /// The keyword table these settings select.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom keyword table cannot be loaded.
    pub fn keyword_table(&self, paths: &Paths) -> Result<Cow<'static, KeywordTable>, IntentError> {
        match &self.keywords_file {
            Some(file) => Ok(Cow::Owned(KeywordTable::from_path(&paths.keywords_file(file))?)),
            None => Ok(Cow::Borrowed(KeywordTable::builtin(self.locale))),
        }
    }

    /// Build the parser these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom keyword table cannot be loaded or
    /// compiled.
    pub fn build_parser(&self, paths: &Paths) -> Result<ParserHandle, IntentError> {
        match self.keyword_table(paths)? {
            Cow::Owned(table) => Ok(ParserHandle::Custom(Box::new(IntentParser::new(&table)?))),
            Cow::Borrowed(_) => Ok(ParserHandle::Builtin(IntentParser::builtin(self.locale))),
        }
    }
}

/// A parser that is either shared and built in, or compiled from a file.
#[derive(Debug)]
pub enum ParserHandle {
    /// One of the process-wide built-in parsers.
    Builtin(&'static IntentParser),
    /// A parser compiled from a custom keyword table.
    Custom(Box<IntentParser>),
}

impl std::ops::Deref for ParserHandle {
    type Target = IntentParser;

    fn deref(&self) -> &Self::Target {
        match self {
            Self::Builtin(parser) => parser,
            Self::Custom(parser) => parser,
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, IntentError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            IntentError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            IntentError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), IntentError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| IntentError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            IntentError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }
}
