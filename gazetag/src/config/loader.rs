//! Configuration loader.
//!
//! This module provides functionality to load configuration from multiple sources.

use super::{ConfigError, DEFAULT_CONFIG_FILES, ENV_PREFIX, Result, models::*, validation};
use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
};
use std::path::{Path, PathBuf};

/// Configuration loader that handles loading from multiple sources.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    figment: Figment,
}

impl ConfigLoader {
    /// Create a new configuration loader with default values.
    pub fn new() -> Self {
        let figment = Figment::new().merge(Serialized::defaults(GazetagConfig::default()));
        Self { figment }
    }

    /// Create a loader whose base log level is `level` instead of the
    /// library default.
    ///
    /// Files and environment variables loaded afterwards still override it.
    pub fn with_default_log_level(level: LogLevel) -> Self {
        let mut loader = Self::new();
        loader.merge(Serialized::default("logging.level", level));
        loader
    }

    /// Load configuration from a file.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&mut Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileLoadError(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let figment = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Figment::from(Toml::file(path)),
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => {
                return Err(ConfigError::FileLoadError(format!(
                    "Unsupported file format: {}",
                    path.display()
                )));
            }
        };
        self.merge_figment(figment);

        Ok(self)
    }

    /// Attempt to load from default configuration file locations.
    ///
    /// The first existing file in [`DEFAULT_CONFIG_FILES`] wins; otherwise the
    /// platform configuration directory is searched for `config.<ext>`.
    pub fn load_default_files(&mut self) -> &mut Self {
        for file in DEFAULT_CONFIG_FILES {
            let path = PathBuf::from(file);
            if path.exists() && self.load_file(&path).is_ok() {
                tracing::debug!(path = %path.display(), "loaded configuration file");
                return self;
            }
        }

        if let Some(proj_dirs) = directories::ProjectDirs::from("org", "gazetag", "gazetag") {
            let config_dir = proj_dirs.config_dir();

            for ext in &["toml", "yaml", "yml", "json"] {
                let path = config_dir.join(format!("config.{}", ext));
                if path.exists() && self.load_file(&path).is_ok() {
                    tracing::debug!(path = %path.display(), "loaded configuration file");
                    break;
                }
            }
        }

        self
    }

    /// Load configuration from `GAZETAG_` environment variables.
    ///
    /// The variables are checked on their own first, so a bad value is
    /// reported as an [`ConfigError::EnvLoadError`] naming the variable rather
    /// than as a parse error of the merged configuration.
    pub fn load_env(&mut self) -> Result<&mut Self> {
        Figment::from(Serialized::defaults(GazetagConfig::default()))
            .merge(env_provider())
            .extract::<GazetagConfig>()
            .map_err(|e| ConfigError::EnvLoadError(e.to_string()))?;

        self.merge_figment(Figment::from(env_provider()));
        Ok(self)
    }

    /// Load configuration from a custom source.
    pub fn merge<T: figment::Provider>(&mut self, provider: T) -> &mut Self {
        let figment = std::mem::take(&mut self.figment).merge(provider);
        self.figment = figment;
        self
    }

    fn merge_figment(&mut self, layer: Figment) {
        let figment = std::mem::take(&mut self.figment).merge(layer);
        self.figment = figment;
    }

    /// Extract and validate the configuration.
    pub fn extract(&self) -> Result<GazetagConfig> {
        let config: GazetagConfig = self
            .figment
            .extract()
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        validation::validate_config(&config)?;

        Ok(config)
    }
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).split("__")
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
