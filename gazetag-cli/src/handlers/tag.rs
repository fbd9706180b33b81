//! Tag command handler

use crate::args::TagArgs;
use crate::context::GazetagCliContext;
use crate::output::*;
use crate::utils::join_text;

pub fn handle_tag_command(
    args: TagArgs,
    ctx: &GazetagCliContext,
    output_format: OutputFormat,
) -> gazetag::Result<()> {
    let sentence = ctx.tagger.tag_text(&join_text(&args.text))?;

    if output_format.is_json() {
        print_json(&sentence);
    } else {
        print_tagged_sentence(&sentence);
    }

    Ok(())
}
