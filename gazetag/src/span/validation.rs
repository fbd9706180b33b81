//! Precondition checks for the resolver and the projector.
//!
//! Both algorithms are total over well-formed input; these checks turn the
//! documented preconditions into [`GazetagError::InvalidInput`] errors instead
//! of silently producing a degraded selection or tag sequence.

use super::Span;
use crate::{GazetagError, Result};

/// Validate candidate spans before resolution.
///
/// Every candidate must cover at least one token, carry at least one label, and
/// the sequence must be sorted by `(start, end)` ascending.
pub fn validate_candidates(candidates: &[Span]) -> Result<()> {
    for (index, span) in candidates.iter().enumerate() {
        check_shape(index, span)?;

        if index > 0 {
            let prev = &candidates[index - 1];
            if (prev.start, prev.end) > (span.start, span.end) {
                return Err(GazetagError::invalid_input(format!(
                    "candidates must be sorted by (start, end): \
                     candidate {} [{}, {}) follows [{}, {})",
                    index, span.start, span.end, prev.start, prev.end
                )));
            }
        }
    }

    Ok(())
}

/// Validate a resolved span list against its token sequence before projection.
///
/// Spans must be in bounds, sorted and pairwise disjoint, and each span's text
/// must equal the tokens it covers joined by single spaces.
pub fn validate_disjoint<S: AsRef<str>>(tokens: &[S], spans: &[Span]) -> Result<()> {
    let mut frontier = 0;

    for (index, span) in spans.iter().enumerate() {
        check_shape(index, span)?;

        if span.end > tokens.len() {
            return Err(GazetagError::invalid_input(format!(
                "span {} [{}, {}) is out of bounds for {} tokens",
                index,
                span.start,
                span.end,
                tokens.len()
            )));
        }

        if span.start < frontier {
            return Err(GazetagError::invalid_input(format!(
                "span {} [{}, {}) overlaps or precedes the previous span ending at {}",
                index, span.start, span.end, frontier
            )));
        }

        let covered = tokens[span.range()]
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        if covered != span.text {
            return Err(GazetagError::invalid_input(format!(
                "span {} text {:?} does not match tokens {:?} at [{}, {})",
                index, span.text, covered, span.start, span.end
            )));
        }

        frontier = span.end;
    }

    Ok(())
}

fn check_shape(index: usize, span: &Span) -> Result<()> {
    if span.start >= span.end {
        return Err(GazetagError::invalid_input(format!(
            "span {} ({:?}) has an empty range [{}, {})",
            index, span.text, span.start, span.end
        )));
    }

    if span.labels.is_empty() {
        return Err(GazetagError::invalid_input(format!(
            "span {} ({:?}) has no labels",
            index, span.text
        )));
    }

    Ok(())
}
