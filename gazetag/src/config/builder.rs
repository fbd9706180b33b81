//! Configuration builder.
//!
//! This module provides a builder pattern API for creating configurations.

use super::{Result, models::*, validation};
use crate::span::OutsideTag;
use std::path::Path;

/// Builder for creating GazetagConfig instances.
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    config: GazetagConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with default values.
    pub fn new() -> Self {
        Self {
            config: GazetagConfig::default(),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: GazetagConfig) -> Self {
        Self { config }
    }

    /// Set the directory of gazetteer files.
    pub fn with_gazetteer_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.gazetteer.dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Match gazetteer entries ignoring ASCII case.
    pub fn with_case_insensitive_matching(mut self, enabled: bool) -> Self {
        self.config.gazetteer.case_insensitive = enabled;
        self
    }

    /// Set the literal used for tokens outside every span.
    pub fn with_outside_tag(mut self, outside: OutsideTag) -> Self {
        self.config.tagging.outside_tag = outside;
        self
    }

    /// Set the separator between labels of a multi-label tag.
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.tagging.label_separator = separator.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.config.logging.level = level;
        self
    }

    /// Set the log format.
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.config.logging.format = format;
        self
    }

    /// Log to a file in addition to (or instead of) the console.
    pub fn with_log_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.logging.file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Create a configuration for development.
    ///
    /// Debug-level logging in the pretty format.
    pub fn development() -> Self {
        Self::new()
            .with_log_level(LogLevel::Debug)
            .with_log_format(LogFormat::Pretty)
    }

    /// Create a configuration whose tags use `0` for outside tokens,
    /// matching corpora annotated with a numeric outside marker.
    pub fn compatibility() -> Self {
        Self::new().with_outside_tag(OutsideTag::Zero)
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<GazetagConfig> {
        validation::validate_config(&self.config)?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
