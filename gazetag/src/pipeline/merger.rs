//! Candidate merger for combining the output of several sources.

use crate::span::Span;

/// Sorts candidates by `(start, end)` and merges candidates covering the same
/// range into one span carrying the union of their labels.
#[derive(Debug, Clone, Default)]
pub struct CandidateMerger;

impl CandidateMerger {
    /// Create a new candidate merger
    pub fn new() -> Self {
        Self
    }

    /// Merge candidates into resolver order.
    pub fn process(&self, mut candidates: Vec<Span>) -> Vec<Span> {
        if candidates.len() <= 1 {
            return candidates;
        }

        candidates.sort_by(|a, b| (a.start, a.end).cmp(&(b.start, b.end)));

        let mut result: Vec<Span> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            match result.last_mut() {
                Some(current) if current.same_range(&candidate) => {
                    current.merge_labels(&candidate);
                }
                _ => result.push(candidate),
            }
        }

        result
    }
}
