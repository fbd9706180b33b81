//! Command handlers for the Gazetag CLI

pub mod labels;
pub mod matching;
pub mod resolve;
pub mod tag;

pub use labels::handle_labels_command;
pub use matching::handle_match_command;
pub use resolve::handle_resolve_command;
pub use tag::handle_tag_command;
