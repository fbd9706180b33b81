use gazetag::config::{ConfigBuilder, ConfigLoader, GazetagConfig, LogLevel};
use gazetag::prelude::*;
use std::path::PathBuf;

/// Configuration overrides taken from global command-line flags.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub gazetteer_dir: Option<PathBuf>,
    pub zero_outside: bool,
    pub case_insensitive: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl CliOverrides {
    /// Load the layered configuration and apply the flag overrides on top.
    ///
    /// An explicit `--config` file replaces the default file search. The CLI
    /// logs at `warn` unless a file or `GAZETAG_LOGGING__LEVEL` says otherwise;
    /// `--verbose` and `--quiet` win over both.
    pub fn load_config(&self) -> gazetag::Result<GazetagConfig> {
        let mut loader = ConfigLoader::with_default_log_level(LogLevel::Warn);
        match &self.config_file {
            Some(path) => {
                loader.load_file(path)?;
            }
            None => {
                loader.load_default_files();
            }
        }
        let config = loader.load_env()?.extract()?;

        let mut builder = ConfigBuilder::from_config(config);
        if let Some(level) = self.log_level() {
            builder = builder.with_log_level(level);
        }
        if let Some(dir) = &self.gazetteer_dir {
            builder = builder.with_gazetteer_dir(dir);
        }
        if self.zero_outside {
            builder = builder.with_outside_tag(OutsideTag::Zero);
        }
        if self.case_insensitive {
            builder = builder.with_case_insensitive_matching(true);
        }

        Ok(builder.build()?)
    }

    fn log_level(&self) -> Option<LogLevel> {
        if self.quiet {
            Some(LogLevel::Error)
        } else if self.verbose {
            Some(LogLevel::Debug)
        } else {
            None
        }
    }
}

pub struct GazetagCliContext {
    pub config: GazetagConfig,
    pub gazetteer: Gazetteer,
    pub tagger: SpanTagger,
}

impl GazetagCliContext {
    pub fn new(config: GazetagConfig) -> gazetag::Result<Self> {
        let dir = config.gazetteer.dir.clone().ok_or_else(|| {
            GazetagError::Configuration(
                "No gazetteer directory configured. Pass --gazetteer <DIR> or set gazetteer.dir"
                    .to_string(),
            )
        })?;

        let gazetteer = Gazetteer::load_dir(&dir, config.gazetteer.case_insensitive)?;
        let tagger = SpanTagger::builder()
            .source(Box::new(gazetteer.clone()))
            .options(config.tagging.tag_options())
            .build()?;

        Ok(Self {
            config,
            gazetteer,
            tagger,
        })
    }
}
