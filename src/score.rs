//! Weighted aggregation of mentions into a bounded score with confidence.
//!
//! The scorer folds a mention list and the total review count into a
//! [`ScoreModel`]: a raw evidence score, a sample-size confidence, and the
//! blend of the two toward a neutral baseline. It is a pure function of its
//! inputs: no hidden state, deterministic, order-independent over mentions.

use std::collections::BTreeMap;

use crate::lexicon::{PhraseId, Polarity};
use crate::mention::Mention;

/// Per-polarity occurrence counts, keyed by interned phrase id.
///
/// Iteration order is lexicon order (ascending id), which is what makes
/// downstream cue ranking deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CueTally {
    counts: BTreeMap<PhraseId, u32>,
}

impl CueTally {
    pub fn new() -> CueTally {
        CueTally::default()
    }

    pub(crate) fn increment(&mut self, id: PhraseId) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    /// Occurrence count for a phrase (zero when absent).
    pub fn count(&self, id: PhraseId) -> u32 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Number of distinct phrases counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// `(id, count)` pairs in lexicon order.
    pub fn iter(&self) -> impl Iterator<Item = (PhraseId, u32)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }
}

/// Fully derived scoring snapshot for one pass over the corpus.
///
/// All three numbers are integers in `[0, 100]` by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreModel {
    /// Raw score blended toward the neutral baseline by confidence.
    pub score: u8,
    /// Evidence-only score before blending.
    pub raw_score: u8,
    /// Sample-size confidence as a percentage.
    pub confidence: u8,
    /// Occurrence counts of effectively-positive cues.
    pub pos_counts: CueTally,
    /// Occurrence counts of effectively-negative cues.
    pub neg_counts: CueTally,
}

/// Folds mentions and review count into a [`ScoreModel`].
///
/// Tunables:
/// - `smooth` dampens extreme scores when total evidence is small and keeps
///   the raw-score denominator nonzero.
/// - `neutral` is the score assigned to a product with no evidence, above
///   the midpoint so sparse data does not read as a bad result.
#[derive(Debug, Clone)]
pub struct Scorer {
    smooth: f64,
    neutral: f64,
}

impl Default for Scorer {
    fn default() -> Self {
        Scorer {
            smooth: 2.0,
            neutral: 65.0,
        }
    }
}

impl Scorer {
    pub fn new() -> Scorer {
        Scorer::default()
    }

    /// Override the smoothing constant (clamped to a small positive value).
    pub fn with_smooth(mut self, smooth: f64) -> Self {
        self.smooth = smooth.max(f64::MIN_POSITIVE);
        self
    }

    /// Override the neutral baseline (clamped to `[0, 100]`).
    pub fn with_neutral(mut self, neutral: f64) -> Self {
        self.neutral = neutral.clamp(0.0, 100.0);
        self
    }

    /// Score a mention list against the total review count.
    ///
    /// A negated mention contributes its weight to the opposite polarity,
    /// but its occurrence is counted under the phrase actually written in
    /// the review.
    pub fn score(&self, mentions: &[Mention], total_reviews: usize) -> ScoreModel {
        let mut pos: u64 = 0;
        let mut neg: u64 = 0;
        let mut pos_counts = CueTally::new();
        let mut neg_counts = CueTally::new();

        for mention in mentions {
            let effective = if mention.negated {
                mention.polarity.invert()
            } else {
                mention.polarity
            };
            match effective {
                Polarity::Good => {
                    pos += u64::from(mention.weight);
                    pos_counts.increment(mention.id);
                }
                Polarity::Bad => {
                    neg += u64::from(mention.weight);
                    neg_counts.increment(mention.id);
                }
            }
        }

        let raw = 100.0 * pos as f64 / (pos as f64 + neg as f64 + self.smooth);
        let raw_score = raw.round() as u8;

        let confidence = confidence_percent(total_reviews);
        let conf = f64::from(confidence) / 100.0;
        let blended = f64::from(raw_score) * conf + self.neutral * (1.0 - conf);
        let score = blended.round() as u8;

        ScoreModel {
            score,
            raw_score,
            confidence,
            pos_counts,
            neg_counts,
        }
    }
}

/// Sample-size confidence as an integer percentage.
///
/// `round(100 * clamp(log10(n + 1) / 2, 0, 1))`: zero at no reviews,
/// logarithmic growth, saturated at 100 once the corpus reaches 99 reviews.
pub fn confidence_percent(total_reviews: usize) -> u8 {
    let conf = ((total_reviews as f64 + 1.0).log10() / 2.0).clamp(0.0, 1.0);
    (conf * 100.0).round() as u8
}
