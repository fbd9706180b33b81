use gazetag::GazetagError;
use gazetag::span::Span;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Input document for the `resolve` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub tokens: Vec<String>,
    pub candidates: Vec<Span>,
}

/// Join positional text arguments into one string.
pub fn join_text(parts: &[String]) -> String {
    parts.join(" ")
}

/// Read a whole file, or stdin when `path` is `-`.
pub fn read_input(path: &str) -> gazetag::Result<String> {
    let mut content = String::new();

    if path == "-" {
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| GazetagError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;
    } else {
        content = std::fs::read_to_string(path).map_err(|source| GazetagError::Io {
            path: path.to_string(),
            source,
        })?;
    }

    Ok(content)
}

pub fn parse_resolve_request(json: &str) -> gazetag::Result<ResolveRequest> {
    serde_json::from_str(json).map_err(|e| {
        GazetagError::InvalidInput(format!(
            "Invalid resolve request (expected {{\"tokens\": [...], \"candidates\": [...]}}): {}",
            e
        ))
    })
}
