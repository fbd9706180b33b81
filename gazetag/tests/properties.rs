//! Property tests for the resolver and the projector.

use gazetag::span::{Span, resolve, tag};
use proptest::prelude::*;

const MAX_TOKENS: usize = 24;

fn tokens() -> Vec<String> {
    (0..MAX_TOKENS).map(|i| format!("t{i}")).collect()
}

fn span_over(tokens: &[String], start: usize, end: usize, label: &str) -> Span {
    Span::new(tokens[start..end].join(" "), start, end, [label])
}

/// Sorted, possibly overlapping candidates within `MAX_TOKENS`.
fn sorted_candidates() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((0..MAX_TOKENS - 1, 1usize..6, 0usize..3), 0..16).prop_map(|raw| {
        let tokens = tokens();
        let mut spans: Vec<Span> = raw
            .into_iter()
            .map(|(start, len, label)| {
                let end = (start + len).min(MAX_TOKENS);
                span_over(&tokens, start, end, ["PER", "LOC", "ORG"][label])
            })
            .collect();
        spans.sort_by_key(|s| (s.start, s.end));
        spans
    })
}

/// Sorted, pairwise disjoint candidates built from alternating gaps and lengths.
fn disjoint_candidates() -> impl Strategy<Value = Vec<Span>> {
    prop::collection::vec((0usize..3, 1usize..4), 0..8).prop_map(|raw| {
        let tokens = tokens();
        let mut spans = Vec::new();
        let mut cursor = 0;
        for (gap, len) in raw {
            let start = cursor + gap;
            let end = start + len;
            if end > MAX_TOKENS {
                break;
            }
            spans.push(span_over(&tokens, start, end, "LOC"));
            cursor = end;
        }
        spans
    })
}

proptest! {
    #[test]
    fn resolved_spans_are_disjoint_and_ordered(candidates in sorted_candidates()) {
        let resolved = resolve(&candidates).unwrap();
        for pair in resolved.windows(2) {
            prop_assert!(pair[0].end <= pair[1].start, "{} overlaps {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn resolved_spans_come_from_the_input(candidates in sorted_candidates()) {
        let resolved = resolve(&candidates).unwrap();
        prop_assert!(resolved.len() <= candidates.len());
        for span in &resolved {
            prop_assert!(candidates.contains(span));
        }
        if !candidates.is_empty() {
            prop_assert!(!resolved.is_empty());
        }
    }

    #[test]
    fn disjoint_input_is_returned_unchanged(candidates in disjoint_candidates()) {
        prop_assert_eq!(resolve(&candidates).unwrap(), candidates);
    }

    #[test]
    fn tag_emits_one_tag_per_token(candidates in sorted_candidates()) {
        let tokens = tokens();
        let resolved = resolve(&candidates).unwrap();
        let tags = tag(&tokens, &resolved).unwrap();

        prop_assert_eq!(tags.len(), tokens.len());

        let tagged = tags.iter().filter(|t| t.as_str() != "O").count();
        let covered: usize = resolved.iter().map(Span::len).sum();
        prop_assert_eq!(tagged, covered);

        for span in &resolved {
            let first = &tags[span.start];
            let last = &tags[span.end - 1];
            if span.len() == 1 {
                prop_assert!(first.starts_with("U-"));
            } else {
                prop_assert!(first.starts_with("B-"));
                prop_assert!(last.starts_with("L-"));
                for inside in &tags[span.start + 1..span.end - 1] {
                    prop_assert!(inside.starts_with("I-"));
                }
            }
        }
    }
}
