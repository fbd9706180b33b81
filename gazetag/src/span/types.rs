//! Span types shared by the resolver, the projector and the matchers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::Range;

/// A labeled, contiguous range of tokens.
///
/// `start` is inclusive and `end` exclusive, both in token indices. `text` is
/// the covered tokens joined by single spaces. Labels are kept ordered so
/// multi-label tags render deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Surface text of the span
    pub text: String,
    /// Inclusive start token index
    pub start: usize,
    /// Exclusive end token index
    pub end: usize,
    /// Entity labels carried by the span (e.g. `COUNTRY` and `LOCATION`)
    pub labels: BTreeSet<String>,
}

impl Span {
    /// Create a new span.
    pub fn new<I, L>(text: impl Into<String>, start: usize, end: usize, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            text: text.into(),
            start,
            end,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of tokens covered by the span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if the span covers no tokens.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Token range covered by the span.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Check if two spans share at least one token.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Check if two spans cover the same token range.
    pub fn same_range(&self, other: &Span) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Union `other`'s labels into this span.
    pub fn merge_labels(&mut self, other: &Span) {
        self.labels.extend(other.labels.iter().cloned());
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.labels.iter().map(String::as_str).collect();
        write!(
            f,
            "{} [{}, {}) {{{}}}",
            self.text,
            self.start,
            self.end,
            labels.join(", ")
        )
    }
}
