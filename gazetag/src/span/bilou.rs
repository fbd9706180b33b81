//! BILOU projection of resolved spans onto a token sequence.
//!
//! Each token inside a span is tagged with its role in the span (Begin, Inside,
//! Last, or Unit for single-token spans) followed by the span's label. Spans
//! with several labels render one `prefix-label` entry per label, joined by a
//! separator (`", "` by default). Tokens outside every span get the outside tag.

use super::{Span, validate_disjoint};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Literal used for tokens outside every span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutsideTag {
    /// The conventional letter `O`
    #[default]
    Letter,
    /// The digit `0`, for consumers that expect the legacy literal
    Zero,
}

impl OutsideTag {
    /// Get the tag literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutsideTag::Letter => "O",
            OutsideTag::Zero => "0",
        }
    }
}

impl fmt::Display for OutsideTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutsideTag::Letter => write!(f, "letter"),
            OutsideTag::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for OutsideTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letter" | "o" => Ok(OutsideTag::Letter),
            "zero" | "0" => Ok(OutsideTag::Zero),
            _ => Err(format!("Invalid outside tag: {}", s)),
        }
    }
}

/// Role of a token within a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BilouPrefix {
    /// First token of a multi-token span
    Begin,
    /// Token strictly between the first and last of a span
    Inside,
    /// Last token of a multi-token span
    Last,
    /// The only token of a single-token span
    Unit,
}

impl BilouPrefix {
    /// Prefix for the token at `offset` within a span of `len` tokens.
    pub fn for_position(offset: usize, len: usize) -> Self {
        if len <= 1 {
            BilouPrefix::Unit
        } else if offset == 0 {
            BilouPrefix::Begin
        } else if offset + 1 == len {
            BilouPrefix::Last
        } else {
            BilouPrefix::Inside
        }
    }

    /// Single-letter form of the prefix.
    pub fn as_char(&self) -> char {
        match self {
            BilouPrefix::Begin => 'B',
            BilouPrefix::Inside => 'I',
            BilouPrefix::Last => 'L',
            BilouPrefix::Unit => 'U',
        }
    }
}

impl fmt::Display for BilouPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Rendering options for [`tag_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagOptions {
    /// Literal for tokens outside every span
    pub outside: OutsideTag,
    /// Separator between the entries of a multi-label tag
    pub label_separator: String,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            outside: OutsideTag::Letter,
            label_separator: ", ".to_string(),
        }
    }
}

impl TagOptions {
    /// Create options with the conventional defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the outside tag literal.
    pub fn with_outside(mut self, outside: OutsideTag) -> Self {
        self.outside = outside;
        self
    }

    /// Set the multi-label separator.
    pub fn with_label_separator(mut self, separator: impl Into<String>) -> Self {
        self.label_separator = separator.into();
        self
    }
}

/// Project disjoint spans onto one BILOU tag per token using default options.
///
/// # Examples
///
/// ```rust
/// use gazetag::span::{tag, Span};
///
/// let tokens = ["Spain", "and", "South", "Korea"];
/// let spans = vec![
///     Span::new("Spain", 0, 1, ["GPE"]),
///     Span::new("South Korea", 2, 4, ["GPE"]),
/// ];
///
/// assert_eq!(tag(&tokens, &spans).unwrap(), vec!["U-GPE", "O", "B-GPE", "L-GPE"]);
/// ```
pub fn tag<S: AsRef<str>>(tokens: &[S], spans: &[Span]) -> Result<Vec<String>> {
    tag_with(tokens, spans, &TagOptions::default())
}

/// Project disjoint spans onto one BILOU tag per token.
///
/// Spans must be sorted, disjoint, in bounds, and their text must match the
/// tokens they cover; otherwise nothing is tagged and
/// [`GazetagError::InvalidInput`](crate::GazetagError::InvalidInput) is returned.
pub fn tag_with<S: AsRef<str>>(
    tokens: &[S],
    spans: &[Span],
    options: &TagOptions,
) -> Result<Vec<String>> {
    validate_disjoint(tokens, spans)?;

    let outside = options.outside.as_str().to_string();
    let mut tags = Vec::with_capacity(tokens.len());

    for span in spans {
        tags.resize(span.start, outside.clone());

        let len = span.len();
        for offset in 0..len {
            let prefix = BilouPrefix::for_position(offset, len);
            tags.push(render(prefix, &span.labels, &options.label_separator));
        }
    }

    tags.resize(tokens.len(), outside);
    Ok(tags)
}

fn render(prefix: BilouPrefix, labels: &BTreeSet<String>, separator: &str) -> String {
    labels
        .iter()
        .map(|label| format!("{}-{}", prefix, label))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_positions() {
        assert_eq!(BilouPrefix::for_position(0, 1), BilouPrefix::Unit);
        assert_eq!(BilouPrefix::for_position(0, 2), BilouPrefix::Begin);
        assert_eq!(BilouPrefix::for_position(1, 2), BilouPrefix::Last);
        assert_eq!(BilouPrefix::for_position(1, 3), BilouPrefix::Inside);
    }

    #[test]
    fn test_outside_tag_parsing() {
        assert_eq!("zero".parse::<OutsideTag>().unwrap(), OutsideTag::Zero);
        assert_eq!("0".parse::<OutsideTag>().unwrap(), OutsideTag::Zero);
        assert_eq!("O".parse::<OutsideTag>().unwrap(), OutsideTag::Letter);
        assert!("none".parse::<OutsideTag>().is_err());
    }

    #[test]
    fn test_multi_label_render() {
        let labels: BTreeSet<String> = ["LOCATION", "COUNTRY"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            render(BilouPrefix::Begin, &labels, ", "),
            "B-COUNTRY, B-LOCATION"
        );
    }
}
