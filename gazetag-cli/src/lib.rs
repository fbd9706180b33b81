pub mod args;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use context::GazetagCliContext;
pub use output::{
    CliColors, OutputFormat, format_error, format_info, format_tag, format_warning,
    output_error_json, print_json, print_labels, print_span_list, print_tagged_sentence,
};
pub use utils::{ResolveRequest, join_text, parse_resolve_request, read_input};
