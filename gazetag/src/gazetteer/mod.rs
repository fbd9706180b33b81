//! Gazetteer matching: dictionary lookup of known spans over a token sequence.
//!
//! Entries are compiled into an Aho-Corasick automaton and searched over the
//! space-joined tokens. A match only becomes a candidate when it starts at the
//! beginning of a token and ends at the end of a token, so `"York"` never
//! matches inside `"Yorkshire"`.

mod loader;

use crate::pipeline::CandidateSource;
use crate::span::Span;
use crate::{GazetagError, Result};
use aho_corasick::{AhoCorasick, MatchKind};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::trace;

/// A compiled dictionary of known surface strings and their labels.
#[derive(Clone)]
pub struct Gazetteer {
    matcher: AhoCorasick,
    /// Labels per pattern, indexed by pattern id
    entries: Vec<(String, BTreeSet<String>)>,
    case_insensitive: bool,
}

impl std::fmt::Debug for Gazetteer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gazetteer")
            .field("entries", &self.entries.len())
            .field("case_insensitive", &self.case_insensitive)
            .finish()
    }
}

impl Gazetteer {
    /// Create a new gazetteer builder
    pub fn builder() -> GazetteerBuilder {
        GazetteerBuilder::new()
    }

    /// Number of distinct surface strings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the gazetteer has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether matching ignores ASCII case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// All distinct labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        self.entries
            .iter()
            .flat_map(|(_, labels)| labels.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Labels registered for an exact surface string.
    pub fn lookup(&self, span: &str) -> Option<&BTreeSet<String>> {
        self.entries
            .binary_search_by(|(text, _)| text.as_str().cmp(span))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    /// Find every gazetteer entry aligned with token boundaries.
    ///
    /// Overlapping and nested matches are all reported. The result is sorted
    /// by `(start, end)`, and matches covering the same range are merged into
    /// one span carrying the union of their labels.
    pub fn find_candidates<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<Span> {
        let mut start_indices = HashMap::new();
        let mut end_indices = HashMap::new();
        let mut byte_index = 0;

        let joined = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let token = token.as_ref();
                start_indices.insert(byte_index, i);
                byte_index += token.len();
                end_indices.insert(byte_index, i);
                byte_index += " ".len();
                token
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut spans = Vec::new();
        for m in self.matcher.find_overlapping_iter(&joined) {
            if let (Some(&start), Some(&last)) =
                (start_indices.get(&m.start()), end_indices.get(&m.end()))
            {
                let (_, labels) = &self.entries[m.pattern().as_usize()];
                spans.push(Span {
                    text: joined[m.start()..m.end()].to_string(),
                    start,
                    end: last + 1,
                    labels: labels.clone(),
                });
            } else {
                trace!(
                    text = &joined[m.start()..m.end()],
                    "ignoring match not aligned with token boundaries"
                );
            }
        }

        spans.sort_by_key(|span| (span.start, span.end));
        spans.dedup_by(|later, earlier| {
            if later.same_range(earlier) {
                earlier.merge_labels(later);
                true
            } else {
                false
            }
        });

        spans
    }
}

impl CandidateSource for Gazetteer {
    fn candidates(&self, tokens: &[String]) -> Result<Vec<Span>> {
        Ok(self.find_candidates(tokens))
    }

    fn name(&self) -> &str {
        "gazetteer"
    }
}

/// Builder for [`Gazetteer`].
///
/// Entries sharing a surface string are stored once with the union of their
/// labels. Surrounding whitespace is trimmed and blank entries are skipped.
#[derive(Debug, Clone, Default)]
pub struct GazetteerBuilder {
    entries: BTreeMap<String, BTreeSet<String>>,
    case_insensitive: bool,
}

impl GazetteerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `(span, label)` entry.
    pub fn entry(mut self, span: impl AsRef<str>, label: impl Into<String>) -> Self {
        self.insert(span, label);
        self
    }

    /// Add several `(span, label)` entries.
    pub fn entries<I, S, L>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, L)>,
        S: AsRef<str>,
        L: Into<String>,
    {
        for (span, label) in entries {
            self.insert(span, label);
        }
        self
    }

    /// Match entries ignoring ASCII case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    /// Add a `(span, label)` entry in place. Returns `false` for blank spans.
    pub fn insert(&mut self, span: impl AsRef<str>, label: impl Into<String>) -> bool {
        let span = span.as_ref().trim();
        if span.is_empty() {
            return false;
        }

        self.entries
            .entry(span.to_string())
            .or_default()
            .insert(label.into());
        true
    }

    /// Number of distinct surface strings added so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compile the automaton.
    pub fn build(self) -> Result<Gazetteer> {
        let entries: Vec<(String, BTreeSet<String>)> = self.entries.into_iter().collect();

        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .ascii_case_insensitive(self.case_insensitive)
            .build(entries.iter().map(|(span, _)| span))
            .map_err(|e| GazetagError::Gazetteer(e.to_string()))?;

        Ok(Gazetteer {
            matcher,
            entries,
            case_insensitive: self.case_insensitive,
        })
    }
}
