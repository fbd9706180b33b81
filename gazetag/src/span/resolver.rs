//! Windowed conflict resolution for overlapping candidate spans.
//!
//! The sweep walks the sorted candidates left to right and looks at up to three
//! of them at a time (`c0`, `c1`, `c2`):
//!
//! | Window                                         | Action                                   |
//! |------------------------------------------------|------------------------------------------|
//! | one candidate                                  | emit it                                  |
//! | two candidates                                 | emit both if disjoint, else the longer   |
//! | `c1` bridges disjoint `c0` and `c2`            | emit `c0` and `c2`, drop `c1`            |
//! | `c0` clear of `c1`, `c1` overlaps `c2`         | emit `c0`, re-evaluate from `c1`         |
//! | `c1` clear of `c2`                             | resolve `c0` against `c1` pairwise       |
//! | all three overlap                              | carry the longer of `c0`/`c1` forward    |
//!
//! Length ties go to the leftmost candidate. Once a span is emitted, later
//! candidates starting before its end are dropped, so the output is always
//! pairwise disjoint.

use super::{Span, validate_candidates};
use crate::Result;
use tracing::{debug, trace};

/// Select a disjoint, left-to-right subset of sorted candidate spans.
///
/// Candidates must be sorted by `(start, end)`; unsorted input, empty ranges
/// and label-less spans are rejected with
/// [`GazetagError::InvalidInput`](crate::GazetagError::InvalidInput).
pub fn resolve(candidates: &[Span]) -> Result<Vec<Span>> {
    validate_candidates(candidates)?;

    let selected = Sweep::new(candidates).run();
    debug!(
        candidates = candidates.len(),
        selected = selected.len(),
        "resolved candidate spans"
    );

    Ok(selected
        .into_iter()
        .map(|index| candidates[index].clone())
        .collect())
}

/// Cursor state for one resolution pass over an immutable candidate slice.
struct Sweep<'a> {
    candidates: &'a [Span],
    /// Next candidate not yet pulled into a window
    cursor: usize,
    /// Survivor of a fully overlapping window, re-evaluated as the next `c0`
    carried: Option<usize>,
    /// End of the most recently emitted span
    frontier: usize,
    selected: Vec<usize>,
}

impl<'a> Sweep<'a> {
    fn new(candidates: &'a [Span]) -> Self {
        Self {
            candidates,
            cursor: 0,
            carried: None,
            frontier: 0,
            selected: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<usize> {
        loop {
            let mut window = [0usize; 3];
            let size = self.fill_window(&mut window);

            match window[..size] {
                [] => break,
                [c0] => {
                    self.emit(c0);
                    self.consume(1);
                }
                [c0, c1] => {
                    self.pairwise(c0, c1);
                    self.consume(2);
                }
                [c0, c1, c2] => self.step(c0, c1, c2),
                _ => unreachable!("window holds at most three candidates"),
            }
        }

        self.selected
    }

    fn step(&mut self, c0: usize, c1: usize, c2: usize) {
        let (a, b, c) = (self.span(c0), self.span(c1), self.span(c2));

        if a.end <= c.start && b.start < a.end && c.start < b.end {
            self.emit(c0);
            self.emit(c2);
            self.drop_candidate(c1, "bridges two disjoint neighbours");
            self.consume(3);
        } else if a.end <= b.start && c.start < b.end {
            self.emit(c0);
            self.consume(1);
        } else if b.end <= c.start {
            self.pairwise(c0, c1);
            self.consume(2);
        } else {
            let survivor = self.longer(c0, c1);
            let loser = if survivor == c0 { c1 } else { c0 };
            self.drop_candidate(loser, "shorter in a fully overlapping window");
            self.consume(2);
            self.carried = Some(survivor);
        }
    }

    /// Emit both spans when disjoint, otherwise only the longer one.
    fn pairwise(&mut self, first: usize, second: usize) {
        if self.span(first).end <= self.span(second).start {
            self.emit(first);
            self.emit(second);
        } else {
            let survivor = self.longer(first, second);
            let loser = if survivor == first { second } else { first };
            self.emit(survivor);
            self.drop_candidate(loser, "shorter overlapping span");
        }
    }

    /// The longer of two spans by token count; `first` wins ties.
    fn longer(&self, first: usize, second: usize) -> usize {
        if self.span(second).len() > self.span(first).len() {
            second
        } else {
            first
        }
    }

    /// Pull up to three live candidates into `window`, carried survivor first.
    fn fill_window(&mut self, window: &mut [usize; 3]) -> usize {
        while self.cursor < self.candidates.len()
            && self.candidates[self.cursor].start < self.frontier
        {
            self.drop_candidate(self.cursor, "overlaps an emitted span");
            self.cursor += 1;
        }

        let mut size = 0;
        if let Some(index) = self.carried {
            window[size] = index;
            size += 1;
        }

        let mut next = self.cursor;
        while size < window.len() && next < self.candidates.len() {
            window[size] = next;
            size += 1;
            next += 1;
        }

        size
    }

    /// Consume the first `count` entries of the current window.
    fn consume(&mut self, mut count: usize) {
        if count > 0 && self.carried.take().is_some() {
            count -= 1;
        }
        self.cursor += count;
    }

    fn emit(&mut self, index: usize) {
        self.frontier = self.span(index).end;
        self.selected.push(index);
    }

    fn drop_candidate(&self, index: usize, reason: &str) {
        let span = self.span(index);
        trace!(
            text = %span.text,
            start = span.start,
            end = span.end,
            reason,
            "dropping candidate span"
        );
    }

    fn span(&self, index: usize) -> &'a Span {
        &self.candidates[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize) -> Span {
        Span::new(format!("{start}-{end}"), start, end, ["X"])
    }

    fn ranges(spans: &[Span]) -> Vec<(usize, usize)> {
        spans.iter().map(|s| (s.start, s.end)).collect()
    }

    #[test]
    fn test_empty_and_single() {
        assert!(resolve(&[]).unwrap().is_empty());
        assert_eq!(ranges(&resolve(&[span(2, 4)]).unwrap()), vec![(2, 4)]);
    }

    #[test]
    fn test_defer_then_pairwise() {
        // c0 clear of c1, c1 overlaps c2: c0 is emitted and [1,3) vs [2,5) resolved next
        let candidates = vec![span(0, 1), span(1, 3), span(2, 5)];
        assert_eq!(ranges(&resolve(&candidates).unwrap()), vec![(0, 1), (2, 5)]);
    }

    #[test]
    fn test_pairwise_winner_reaching_past_c2_drops_c2() {
        let candidates = vec![span(0, 10), span(1, 2), span(3, 4)];
        assert_eq!(ranges(&resolve(&candidates).unwrap()), vec![(0, 10)]);
    }

    #[test]
    fn test_fully_overlapping_window_carries_survivor() {
        // [0,2) and [1,3) tie, [0,2) is carried and then loses to [1,6)
        let candidates = vec![span(0, 2), span(1, 3), span(1, 6)];
        assert_eq!(ranges(&resolve(&candidates).unwrap()), vec![(1, 6)]);
    }

    #[test]
    fn test_span_after_bridge_overlapping_c2_is_dropped() {
        let candidates = vec![span(0, 2), span(1, 4), span(3, 5), span(4, 6)];
        assert_eq!(ranges(&resolve(&candidates).unwrap()), vec![(0, 2), (3, 5)]);
    }
}
