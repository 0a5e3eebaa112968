//! Evidence selection: cue ranking and snippet sampling.
//!
//! Turns the scorer's cue tallies and the raw review texts into
//! human-readable justification: the top-k cues per polarity and a handful
//! of illustrative sentences tied to those cues.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::lexicon::{Lexicon, PhraseId};
use crate::mention::MentionExtractor;
use crate::score::CueTally;
use crate::text::split_sentences;

/// Default `k` for generic cue ranking.
pub const DEFAULT_TOP_CUES: usize = 5;

/// A cue phrase with its occurrence count, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueCount {
    pub phrase: String,
    pub count: u32,
}

/// Rank a tally's cues by descending count, truncated to `k`.
///
/// Ties are broken by lexicon order (ascending phrase id), which is the
/// tally's iteration order, so the same input always ranks the same way.
pub fn top_cues(tally: &CueTally, lexicon: &Lexicon, k: usize) -> Vec<CueCount> {
    ranked(tally, k)
        .into_iter()
        .map(|(id, count)| CueCount {
            phrase: lexicon.phrase(id).to_string(),
            count,
        })
        .collect()
}

/// Ranked phrase ids for a tally, truncated to `k`.
pub(crate) fn top_cue_ids(tally: &CueTally, k: usize) -> Vec<PhraseId> {
    ranked(tally, k).into_iter().map(|(id, _)| id).collect()
}

fn ranked(tally: &CueTally, k: usize) -> Vec<(PhraseId, u32)> {
    let mut entries: Vec<(PhraseId, u32)> = tally.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries.truncate(k);
    entries
}

/// Samples representative sentences from the review corpus.
///
/// Tunables (defaults in parentheses): how many snippets to return (3), how
/// many leading sentences of each review to consider (4), and the minimum
/// sentence length in graphemes (30) below which fragments are skipped.
#[derive(Debug, Clone)]
pub struct SnippetSampler {
    want: usize,
    max_sentences: usize,
    min_graphemes: usize,
}

impl Default for SnippetSampler {
    fn default() -> Self {
        SnippetSampler {
            want: 3,
            max_sentences: 4,
            min_graphemes: 30,
        }
    }
}

impl SnippetSampler {
    pub fn new() -> SnippetSampler {
        SnippetSampler::default()
    }

    pub fn with_want(mut self, want: usize) -> Self {
        self.want = want;
        self
    }

    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    pub fn with_min_graphemes(mut self, min_graphemes: usize) -> Self {
        self.min_graphemes = min_graphemes;
        self
    }

    /// Collect up to `want` qualifying sentences, in discovery order.
    ///
    /// Reviews are visited in corpus order, each contributing at most its
    /// first `max_sentences` sentences. When `keys` is non-empty, only
    /// sentences containing at least one key phrase as a whole word
    /// (case-insensitive) qualify; otherwise any long-enough sentence does.
    pub fn sample<'a, I>(
        &self,
        reviews: I,
        keys: &BTreeSet<PhraseId>,
        extractor: &MentionExtractor,
    ) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut snippets = Vec::new();
        if self.want == 0 {
            return snippets;
        }

        for review in reviews {
            for sentence in split_sentences(review).into_iter().take(self.max_sentences) {
                if sentence.graphemes(true).count() < self.min_graphemes {
                    continue;
                }
                if !keys.is_empty() && !extractor.contains_any(&sentence, keys) {
                    continue;
                }
                snippets.push(sentence);
                if snippets.len() >= self.want {
                    return snippets;
                }
            }
        }
        snippets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Lexicon, LexiconEntry, Polarity};
    use crate::mention::Mention;
    use crate::score::Scorer;

    fn lexicon() -> Lexicon {
        Lexicon::new(
            vec![
                LexiconEntry::new("gentle", 2, Polarity::Good),
                LexiconEntry::new("sticky", 3, Polarity::Bad),
                LexiconEntry::new("heavy", 3, Polarity::Bad),
                LexiconEntry::new("flaky", 2, Polarity::Bad),
            ],
            vec!["not".to_string()],
        )
        .unwrap()
    }

    fn tally_of(counts: &[(usize, u32)]) -> CueTally {
        // Build a tally through the scorer so the test exercises the same
        // path production code uses.
        let mut mentions = Vec::new();
        for &(id, n) in counts {
            for _ in 0..n {
                mentions.push(Mention {
                    id: PhraseId(id),
                    polarity: Polarity::Bad,
                    weight: 1,
                    negated: false,
                });
            }
        }
        Scorer::new().score(&mentions, 1).neg_counts
    }

    #[test]
    fn ranks_by_descending_count() {
        let lex = lexicon();
        let tally = tally_of(&[(1, 1), (2, 3), (3, 2)]);
        let cues = top_cues(&tally, &lex, DEFAULT_TOP_CUES);
        let phrases: Vec<&str> = cues.iter().map(|c| c.phrase.as_str()).collect();
        assert_eq!(phrases, vec!["heavy", "flaky", "sticky"]);
        assert_eq!(cues[0].count, 3);
    }

    #[test]
    fn ties_break_in_lexicon_order() {
        let lex = lexicon();
        let tally = tally_of(&[(3, 2), (1, 2), (2, 2)]);
        let phrases: Vec<String> = top_cues(&tally, &lex, DEFAULT_TOP_CUES)
            .into_iter()
            .map(|c| c.phrase)
            .collect();
        assert_eq!(phrases, vec!["sticky", "heavy", "flaky"]);
    }

    #[test]
    fn truncates_to_k() {
        let lex = lexicon();
        let tally = tally_of(&[(1, 3), (2, 2), (3, 1)]);
        assert_eq!(top_cues(&tally, &lex, 2).len(), 2);
        assert!(top_cues(&tally, &lex, 0).is_empty());
    }

    fn sampler_fixture() -> (MentionExtractor, BTreeSet<PhraseId>) {
        let ex = MentionExtractor::new(lexicon()).unwrap();
        let mut keys = BTreeSet::new();
        keys.insert(ex.lexicon().id_of("sticky").unwrap());
        (ex, keys)
    }

    #[test]
    fn returns_at_most_want_snippets() {
        let (ex, keys) = sampler_fixture();
        let reviews = [
            "It turned sticky within the first hour of wearing it. \
             Still sticky by lunch and even worse after the gym. \
             Honestly sticky residue stayed on everything I touched.",
            "Another review where the sticky texture really bothered me a lot.",
        ];
        let snippets = SnippetSampler::new().with_want(2).sample(
            reviews.iter().copied(),
            &keys,
            &ex,
        );
        assert_eq!(snippets.len(), 2);
    }

    #[test]
    fn skips_short_fragments() {
        let (ex, keys) = sampler_fixture();
        let reviews = ["Sticky. The sticky finish never set and ruined the whole look."];
        let snippets = SnippetSampler::new().sample(reviews.iter().copied(), &keys, &ex);
        assert_eq!(
            snippets,
            vec!["The sticky finish never set and ruined the whole look.".to_string()]
        );
    }

    #[test]
    fn only_first_sentences_are_considered() {
        let (ex, keys) = sampler_fixture();
        let reviews = ["One filler sentence sits right here. Second filler sentence sits here. \
                        Third filler sentence sits here too. Fourth filler sentence in a row. \
                        The sticky part only shows up in sentence number five."];
        let snippets = SnippetSampler::new().sample(reviews.iter().copied(), &keys, &ex);
        assert!(snippets.is_empty());
    }

    #[test]
    fn empty_keys_accept_any_qualifying_sentence() {
        let ex = MentionExtractor::new(lexicon()).unwrap();
        let reviews = ["This sentence mentions no cue but is easily long enough."];
        let snippets =
            SnippetSampler::new().sample(reviews.iter().copied(), &BTreeSet::new(), &ex);
        assert_eq!(snippets.len(), 1);
    }

    #[test]
    fn key_filter_requires_whole_word() {
        let (ex, keys) = sampler_fixture();
        let reviews = ["The unstickyish finish of this product is wonderful overall."];
        let snippets = SnippetSampler::new().sample(reviews.iter().copied(), &keys, &ex);
        assert!(snippets.is_empty());
    }
}
