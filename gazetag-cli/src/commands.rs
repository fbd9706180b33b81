//! Command enum definitions
//!
//! This module contains the CLI command enum that defines the command structure.

use crate::args::*;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Display version information
    Version,

    /// Tag text with BILOU labels from the gazetteer
    Tag(TagArgs),

    /// List gazetteer matches in text
    #[command(name = "match")]
    Match(MatchArgs),

    /// Resolve and tag candidate spans read from JSON
    Resolve(ResolveArgs),

    /// List the labels known to the gazetteer
    Labels,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Whether the command needs the gazetteer loaded.
    pub fn needs_gazetteer(&self) -> bool {
        matches!(
            self,
            Commands::Tag(_) | Commands::Match(_) | Commands::Labels
        )
    }
}
