//! Command argument structures
//!
//! This module contains the CLI argument structs for each command.

use clap::Args;
use clap_complete::Shell;

#[derive(Args)]
pub struct TagArgs {
    /// Text to tag; multiple arguments are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Args)]
pub struct MatchArgs {
    /// Text to match against the gazetteer
    #[arg(required = true)]
    pub text: Vec<String>,

    /// Show the disjoint spans kept by the resolver instead of all candidates
    #[arg(long, short)]
    pub resolved: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// JSON file with `tokens` and sorted `candidates`, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
