//! Mention extraction: locating lexicon phrases in review text and
//! resolving their negation status.
//!
//! A [`Mention`] is one detected occurrence of a lexicon phrase. Each
//! occurrence inspects a bounded window of preceding text (the last few
//! whitespace-separated tokens) for negation words; a negated mention's
//! effective polarity is inverted by the scorer, not here: the mention
//! keeps its original phrase identity so cue counts stay keyed by the
//! phrase actually written in the review.

use std::collections::BTreeSet;

use crate::error::LexiconResult;
use crate::lexicon::{Lexicon, PhraseId, Polarity};
use crate::matcher::PhraseMatcher;
use crate::text::floor_char_boundary;

/// A single detected occurrence of a lexicon phrase, with negation resolved.
///
/// Ephemeral: produced fresh on each scoring pass and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mention {
    /// Interned id of the matched phrase.
    pub id: PhraseId,
    /// Inherent polarity of the phrase (not yet inverted for negation).
    pub polarity: Polarity,
    /// Weight of the phrase.
    pub weight: u32,
    /// Whether a negation token precedes this occurrence.
    pub negated: bool,
}

/// Scans review text for lexicon phrase occurrences.
///
/// Owns the lexicon and its compiled automaton; construct once per session
/// and reuse across scoring passes.
pub struct MentionExtractor {
    lexicon: Lexicon,
    matcher: PhraseMatcher,
    /// Size in bytes of the preceding text window inspected for negations.
    window_chars: usize,
    /// How many trailing tokens of the window are checked.
    window_tokens: usize,
}

impl MentionExtractor {
    /// Compile an extractor for the given lexicon.
    pub fn new(lexicon: Lexicon) -> LexiconResult<MentionExtractor> {
        let matcher = PhraseMatcher::new(&lexicon)?;
        Ok(MentionExtractor {
            lexicon,
            matcher,
            window_chars: 60,
            window_tokens: 3,
        })
    }

    /// Adjust the negation window (defaults: 60 bytes, 3 tokens).
    pub fn with_negation_window(mut self, chars: usize, tokens: usize) -> Self {
        self.window_chars = chars;
        self.window_tokens = tokens;
        self
    }

    /// The lexicon this extractor was built from.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract all phrase mentions from one review text.
    ///
    /// The input is lowercased once; matching is whole-word. Every phrase is
    /// searched independently, so overlapping occurrences of different
    /// phrases are all reported. Empty text yields no mentions.
    pub fn extract(&self, text: &str) -> Vec<Mention> {
        if text.is_empty() {
            return Vec::new();
        }
        let lower = text.to_lowercase();

        self.matcher
            .find(&lower)
            .into_iter()
            .map(|hit| {
                let entry = self.lexicon.entry(hit.id);
                Mention {
                    id: hit.id,
                    polarity: entry.polarity,
                    weight: entry.weight,
                    negated: self.is_negated(&lower, hit.start),
                }
            })
            .collect()
    }

    /// Whether `text` contains one of `keys` as a whole word.
    ///
    /// Case-insensitive; reuses the precompiled automaton.
    pub(crate) fn contains_any(&self, text: &str, keys: &BTreeSet<PhraseId>) -> bool {
        if keys.is_empty() {
            return false;
        }
        let lower = text.to_lowercase();
        self.matcher
            .find(&lower)
            .iter()
            .any(|hit| keys.contains(&hit.id))
    }

    /// Inspect the last `window_tokens` tokens of the bounded window before
    /// `start` for a negation word.
    fn is_negated(&self, lower: &str, start: usize) -> bool {
        let from = floor_char_boundary(lower, start.saturating_sub(self.window_chars));
        let window = &lower[from..start];
        window
            .split_whitespace()
            .rev()
            .take(self.window_tokens)
            .any(|token| self.lexicon.is_negation(token))
    }
}
