//! # Gazetag
//!
//! Gazetteer-driven entity tagging for token sequences. Dictionary matches are
//! collected as candidate spans, overlapping candidates are resolved into a
//! disjoint selection, and the selection is projected onto per-token BILOU tags.
//!
//! ## Quick Start
//!
//! ```rust
//! use gazetag::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let gazetteer = Gazetteer::builder()
//!         .entry("Spain", "GPE")
//!         .entry("South Korea", "GPE")
//!         .build()?;
//!
//!     let tagger = SpanTagger::builder()
//!         .source(Box::new(gazetteer))
//!         .build()?;
//!
//!     let sentence = tagger.tag_text("Spain and South Korea")?;
//!     assert_eq!(sentence.tags, vec!["U-GPE", "O", "B-GPE", "L-GPE"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Working with spans directly
//!
//! The resolver and the projector are plain functions over slices, so any
//! matcher that produces sorted candidates can feed them:
//!
//! ```rust
//! use gazetag::span::{resolve, tag, Span};
//!
//! let tokens = ["New", "York", "City"];
//! let candidates = vec![
//!     Span::new("New York", 0, 2, ["GPE"]),
//!     Span::new("New York City", 0, 3, ["GPE"]),
//! ];
//!
//! let resolved = resolve(&candidates).unwrap();
//! assert_eq!(resolved.len(), 1);
//! assert_eq!(tag(&tokens, &resolved).unwrap(), vec!["B-GPE", "I-GPE", "L-GPE"]);
//! ```
//!
//! ## Architecture
//!
//! - **span**: span model, the windowed conflict resolver and the BILOU projector
//! - **gazetteer**: Aho-Corasick dictionary matcher producing candidate spans
//! - **pipeline**: composes candidate sources, resolution and tagging
//! - **config** / **logging**: layered configuration and `tracing` setup

pub mod config;
pub mod gazetteer;
pub mod logging;
pub mod pipeline;
pub mod span;

/// The prelude re-exports commonly used types for convenience
pub mod prelude {
    pub use crate::config::{
        ConfigBuilder, ConfigLoader, GazetagConfig, GazetteerConfig, LogFormat, LogLevel,
        LoggingConfig, TaggingConfig,
    };

    pub use crate::gazetteer::{Gazetteer, GazetteerBuilder};

    pub use crate::pipeline::{
        CandidateMerger, CandidateSource, SpanTagger, SpanTaggerBuilder, TaggedSentence, tokenize,
    };

    pub use crate::span::{
        BilouPrefix, OutsideTag, Span, TagOptions, resolve, tag, tag_with, validate_candidates,
        validate_disjoint,
    };

    pub use crate::{GazetagError, Result};
}

/// Current library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Error type for Gazetag operations
#[derive(Debug, thiserror::Error)]
pub enum GazetagError {
    /// Caller-supplied spans or tokens violate a documented precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Gazetteer construction or matching error
    #[error("Gazetteer error: {0}")]
    Gazetteer(String),

    /// Failed to read gazetteer data from disk
    #[error("I/O error for {path}: {source}. Check that the path exists and is readable")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Logging error
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LogError),

    /// Other unclassified errors
    #[error("{0}")]
    Other(String),
}

impl GazetagError {
    /// Shorthand for an [`GazetagError::InvalidInput`] error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        GazetagError::InvalidInput(msg.into())
    }

    pub(crate) fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        GazetagError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

impl From<crate::config::ConfigError> for GazetagError {
    fn from(err: crate::config::ConfigError) -> Self {
        GazetagError::Configuration(err.to_string())
    }
}

/// Result type for Gazetag operations
pub type Result<T> = std::result::Result<T, GazetagError>;

/// Build a [`pipeline::SpanTagger`] from the provided configuration.
///
/// Logging is initialized from `config.logging` first; an already installed
/// global subscriber is left in place. The returned guard must be kept alive
/// for as long as file logging should keep flushing.
///
/// # Examples
///
/// ```rust,no_run
/// use gazetag::prelude::*;
///
/// fn example() -> Result<()> {
///     let config = ConfigBuilder::new()
///         .with_gazetteer_dir("res/ner")
///         .build()?;
///
///     let (tagger, _guard) = gazetag::init(&config)?;
///     let sentence = tagger.tag_text("I went to Spain")?;
///     println!("{:?}", sentence.tags);
///     Ok(())
/// }
/// ```
pub fn init(
    config: &config::GazetagConfig,
) -> Result<(pipeline::SpanTagger, Option<logging::LogGuard>)> {
    let guard = logging::init(&config.logging)?;
    let tagger = pipeline::SpanTagger::from_config(config)?;
    Ok((tagger, guard))
}
