//! Resolve command handler
//!
//! Reads a `{"tokens": [...], "candidates": [...]}` document, resolves the
//! candidates and projects them onto tags without consulting the gazetteer.

use crate::args::ResolveArgs;
use crate::output::*;
use crate::utils::{parse_resolve_request, read_input};
use gazetag::config::GazetagConfig;
use gazetag::pipeline::TaggedSentence;
use gazetag::span::{resolve, tag_with};

pub fn handle_resolve_command(
    args: ResolveArgs,
    config: &GazetagConfig,
    output_format: OutputFormat,
) -> gazetag::Result<()> {
    let request = parse_resolve_request(&read_input(&args.input)?)?;

    let spans = resolve(&request.candidates)?;
    let tags = tag_with(&request.tokens, &spans, &config.tagging.tag_options())?;

    let sentence = TaggedSentence {
        tokens: request.tokens,
        candidates: request.candidates,
        spans,
        tags,
    };

    if output_format.is_json() {
        print_json(&sentence);
    } else {
        print_tagged_sentence(&sentence);
    }

    Ok(())
}
