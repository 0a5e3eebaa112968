//! Precompiled multi-pattern phrase matcher.
//!
//! All lexicon phrases are compiled into one Aho-Corasick automaton at
//! startup, giving deterministic linear-time scanning per review with no
//! per-call pattern construction. Pattern indices coincide with
//! [`PhraseId`]s, so a hit maps straight back to its lexicon entry.

use aho_corasick::AhoCorasick;

use crate::error::{LexiconError, LexiconResult};
use crate::lexicon::{Lexicon, PhraseId};

/// One whole-word occurrence of a lexicon phrase in a haystack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhraseHit {
    pub id: PhraseId,
    /// Byte offset of the occurrence start.
    pub start: usize,
}

/// Automaton over every lexicon phrase, built once per lexicon.
#[derive(Debug)]
pub(crate) struct PhraseMatcher {
    automaton: AhoCorasick,
}

impl PhraseMatcher {
    pub(crate) fn new(lexicon: &Lexicon) -> LexiconResult<PhraseMatcher> {
        let automaton = AhoCorasick::new(lexicon.phrases()).map_err(|err| {
            LexiconError::Matcher {
                message: err.to_string(),
            }
        })?;
        Ok(PhraseMatcher { automaton })
    }

    /// Find all whole-word phrase occurrences in lowercased text.
    ///
    /// Occurrences of *different* phrases may overlap (a hit on
    /// "not greasy" does not cancel the inner "greasy"); occurrences of the
    /// *same* phrase are non-overlapping, greedy left to right.
    pub(crate) fn find(&self, lower: &str) -> Vec<PhraseHit> {
        let bytes = lower.as_bytes();
        let mut last_end = vec![0usize; self.automaton.patterns_len()];
        let mut hits = Vec::new();

        for m in self.automaton.find_overlapping_iter(lower) {
            let (start, end) = (m.start(), m.end());
            if start > 0 && is_word_byte(bytes[start - 1]) {
                continue;
            }
            if end < bytes.len() && is_word_byte(bytes[end]) {
                continue;
            }
            let pattern = m.pattern().as_usize();
            if start < last_end[pattern] {
                continue;
            }
            last_end[pattern] = end;
            hits.push(PhraseHit {
                id: PhraseId(pattern),
                start,
            });
        }
        hits
    }
}

/// Word characters are alphanumerics, hyphens, and any non-ASCII byte.
/// Treating the hyphen as word-internal makes hyphenated compounds single
/// words: "fragrance" does not match inside "fragrance-free".
fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte >= 0x80
}
