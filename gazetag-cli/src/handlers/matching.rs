//! Match command handler

use crate::args::MatchArgs;
use crate::context::GazetagCliContext;
use crate::output::*;
use crate::utils::join_text;
use gazetag::pipeline::tokenize;
use gazetag::span::resolve;

pub fn handle_match_command(
    args: MatchArgs,
    ctx: &GazetagCliContext,
    output_format: OutputFormat,
) -> gazetag::Result<()> {
    let tokens = tokenize(&join_text(&args.text));
    let candidates = ctx.tagger.candidates(&tokens)?;

    let (spans, title) = if args.resolved {
        (resolve(&candidates)?, "resolved spans")
    } else {
        (candidates, "candidates")
    };
    tracing::debug!(tokens = tokens.len(), spans = spans.len(), "matched text");

    if output_format.is_json() {
        print_json(&spans);
    } else {
        print_span_list(&spans, title);
    }

    Ok(())
}
