//! Configuration model definitions.

use crate::span::{OutsideTag, TagOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Main configuration structure for Gazetag.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GazetagConfig {
    /// Gazetteer source configuration
    pub gazetteer: GazetteerConfig,

    /// Tag rendering configuration
    pub tagging: TaggingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Gazetteer source configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct GazetteerConfig {
    /// Directory of `<LABEL>.txt` files, one entry per line
    pub dir: Option<PathBuf>,

    /// Whether matching ignores ASCII case
    pub case_insensitive: bool,
}

/// Tag rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TaggingConfig {
    /// Literal for tokens outside every span (`letter` renders `O`, `zero` renders `0`)
    pub outside_tag: OutsideTag,

    /// Separator between the entries of a multi-label tag
    pub label_separator: String,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        let options = TagOptions::default();
        Self {
            outside_tag: options.outside,
            label_separator: options.label_separator,
        }
    }
}

impl TaggingConfig {
    /// Rendering options for the projector.
    pub fn tag_options(&self) -> TagOptions {
        TagOptions::new()
            .with_outside(self.outside_tag)
            .with_label_separator(self.label_separator.clone())
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    pub level: LogLevel,

    /// Log format
    pub format: LogFormat,

    /// File to log to (if any)
    pub file: Option<PathBuf>,

    /// Whether to log to the console (written to stderr)
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Default,
            file: None,
            console: true,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level
    Trace,

    /// Debug level
    Debug,

    /// Info level
    Info,

    /// Warn level
    Warn,

    /// Error level
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }
}

/// Log format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default format
    Default,

    /// JSON format
    Json,

    /// Compact format
    Compact,

    /// Pretty format
    Pretty,
}
