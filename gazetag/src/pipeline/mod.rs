//! Composable tagging pipeline.
//!
//! A [`SpanTagger`] collects candidate spans from one or more
//! [`CandidateSource`]s, merges them into resolver order, resolves overlaps and
//! projects the survivors onto BILOU tags.

mod merger;

pub use merger::CandidateMerger;

use crate::config::GazetagConfig;
use crate::gazetteer::Gazetteer;
use crate::span::{OutsideTag, Span, TagOptions, resolve, tag_with};
use crate::{GazetagError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Producer of candidate spans for a token sequence.
///
/// Implementations may return candidates in any order; the pipeline sorts and
/// merges them before resolution.
pub trait CandidateSource: Send + Sync + std::fmt::Debug {
    /// Find candidate spans in the given tokens.
    fn candidates(&self, tokens: &[String]) -> Result<Vec<Span>>;

    /// Get the name of this source
    fn name(&self) -> &str;

    /// Check if this source should be consulted.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Result of tagging one token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedSentence {
    /// Input tokens
    pub tokens: Vec<String>,
    /// Merged candidates before resolution
    pub candidates: Vec<Span>,
    /// Disjoint spans selected by the resolver
    pub spans: Vec<Span>,
    /// One BILOU tag per token
    pub tags: Vec<String>,
}

impl TaggedSentence {
    /// Iterate `(token, tag)` pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .map(String::as_str)
            .zip(self.tags.iter().map(String::as_str))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Split text into tokens on whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

/// Gazetteer tagging pipeline.
pub struct SpanTagger {
    sources: Vec<Box<dyn CandidateSource>>,
    merger: CandidateMerger,
    options: TagOptions,
}

impl std::fmt::Debug for SpanTagger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpanTagger")
            .field("sources", &self.source_names())
            .field("options", &self.options)
            .finish()
    }
}

impl SpanTagger {
    /// Create a new pipeline builder
    pub fn builder() -> SpanTaggerBuilder {
        SpanTaggerBuilder::new()
    }

    /// Build a tagger backed by the configured gazetteer directory.
    pub fn from_config(config: &GazetagConfig) -> Result<Self> {
        let dir = config.gazetteer.dir.as_ref().ok_or_else(|| {
            GazetagError::Configuration(
                "No gazetteer directory configured. \
                 Set gazetteer.dir in the config file or GAZETAG_GAZETTEER__DIR"
                    .to_string(),
            )
        })?;

        let gazetteer = Gazetteer::load_dir(dir, config.gazetteer.case_insensitive)?;

        Self::builder()
            .source(Box::new(gazetteer))
            .options(config.tagging.tag_options())
            .build()
    }

    /// Rendering options used for projection.
    pub fn options(&self) -> &TagOptions {
        &self.options
    }

    /// Names of the configured sources, in consultation order.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|source| source.name()).collect()
    }

    /// Collect and merge candidates from every enabled source.
    pub fn candidates(&self, tokens: &[String]) -> Result<Vec<Span>> {
        let mut candidates = Vec::new();

        for source in &self.sources {
            if !source.is_enabled() {
                debug!(source = source.name(), "skipping disabled candidate source");
                continue;
            }

            let found = source.candidates(tokens)?;
            debug!(source = source.name(), found = found.len(), "collected candidates");
            candidates.extend(found);
        }

        Ok(self.merger.process(candidates))
    }

    /// Tag a token sequence.
    pub fn tag_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Result<TaggedSentence> {
        let tokens: Vec<String> = tokens.iter().map(|t| t.as_ref().to_string()).collect();

        let candidates = self.candidates(&tokens)?;
        let spans = resolve(&candidates)?;
        let tags = tag_with(&tokens, &spans, &self.options)?;

        debug!(
            tokens = tokens.len(),
            candidates = candidates.len(),
            spans = spans.len(),
            "tagged sentence"
        );

        Ok(TaggedSentence {
            tokens,
            candidates,
            spans,
            tags,
        })
    }

    /// Tokenize on whitespace and tag the result.
    pub fn tag_text(&self, text: &str) -> Result<TaggedSentence> {
        self.tag_tokens(&tokenize(text))
    }
}

/// Builder for creating tagging pipelines
pub struct SpanTaggerBuilder {
    sources: Vec<Box<dyn CandidateSource>>,
    options: TagOptions,
}

impl SpanTaggerBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            options: TagOptions::default(),
        }
    }

    /// Add a candidate source to the pipeline
    pub fn source(mut self, source: Box<dyn CandidateSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// Set the rendering options
    pub fn options(mut self, options: TagOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the outside tag literal
    pub fn outside_tag(mut self, outside: OutsideTag) -> Self {
        self.options.outside = outside;
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Result<SpanTagger> {
        if self.sources.is_empty() {
            return Err(GazetagError::invalid_input(
                "Pipeline requires at least one candidate source",
            ));
        }

        if self.options.label_separator.is_empty() {
            return Err(GazetagError::invalid_input(
                "Label separator cannot be empty",
            ));
        }

        Ok(SpanTagger {
            sources: self.sources,
            merger: CandidateMerger::new(),
            options: self.options,
        })
    }
}

impl Default for SpanTaggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
