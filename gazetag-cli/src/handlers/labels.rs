//! Labels command handler

use crate::context::GazetagCliContext;
use crate::output::*;
use serde_json::json;

pub fn handle_labels_command(
    ctx: &GazetagCliContext,
    output_format: OutputFormat,
) -> gazetag::Result<()> {
    let labels = ctx.gazetteer.labels();

    if output_format.is_json() {
        print_json(&json!({
            "labels": labels,
            "entries": ctx.gazetteer.len(),
            "case_insensitive": ctx.gazetteer.is_case_insensitive(),
        }));
    } else {
        print_labels(&labels, ctx.gazetteer.len());
    }

    Ok(())
}
