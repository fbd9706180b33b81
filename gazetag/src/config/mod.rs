//! Configuration system for Gazetag.
//!
//! Configuration is layered: serialized defaults, then an optional TOML, YAML
//! or JSON file, then `GAZETAG_`-prefixed environment variables (nested keys
//! separated by `__`, e.g. `GAZETAG_TAGGING__OUTSIDE_TAG=zero`).

mod builder;
mod loader;
mod models;
#[cfg(test)]
mod tests;
mod validation;

pub use builder::ConfigBuilder;
pub use loader::ConfigLoader;
pub use models::*;
pub use validation::validate_config;

/// Default configuration file names that the system will look for
pub const DEFAULT_CONFIG_FILES: &[&str] = &[
    "gazetag.toml",
    "gazetag.yaml",
    "gazetag.yml",
    "gazetag.json",
    ".gazetag/config.toml",
    ".gazetag/config.yaml",
    ".gazetag/config.yml",
    ".gazetag/config.json",
];

/// Environment variable prefix for Gazetag configuration
pub const ENV_PREFIX: &str = "GAZETAG_";

/// Configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error occurred during file loading
    #[error("Failed to load configuration file: {0}")]
    FileLoadError(String),

    /// A `GAZETAG_` environment variable holds an invalid value
    #[error("Failed to load environment variables: {0}")]
    EnvLoadError(String),

    /// Error occurred during validation
    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    /// Error occurred during parsing
    #[error("Configuration parsing error: {0}")]
    ParseError(String),
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
