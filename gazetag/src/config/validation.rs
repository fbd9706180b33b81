//! Configuration validation.
//!
//! This module provides validation functions for configuration.

use super::ConfigError;
use super::models::*;

/// Validate the entire configuration.
pub fn validate_config(config: &GazetagConfig) -> Result<(), ConfigError> {
    validate_gazetteer_config(&config.gazetteer)?;
    validate_tagging_config(&config.tagging)?;
    validate_logging_config(&config.logging)?;

    Ok(())
}

fn validate_gazetteer_config(config: &GazetteerConfig) -> Result<(), ConfigError> {
    if let Some(dir) = &config.dir {
        if !dir.exists() {
            return Err(ConfigError::ValidationError(format!(
                "Gazetteer directory does not exist: {}",
                dir.display()
            )));
        }
        if !dir.is_dir() {
            return Err(ConfigError::ValidationError(format!(
                "Gazetteer path is not a directory: {}",
                dir.display()
            )));
        }
    }

    Ok(())
}

fn validate_tagging_config(config: &TaggingConfig) -> Result<(), ConfigError> {
    if config.label_separator.is_empty() {
        return Err(ConfigError::ValidationError(
            "Label separator cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_logging_config(config: &LoggingConfig) -> Result<(), ConfigError> {
    if let Some(file) = &config.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Log file path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
