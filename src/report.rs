//! Report assembly: packaging a scoring pass into an immutable snapshot.
//!
//! A [`ScoreReport`] is the hand-off structure for the presentation layer:
//! the blended score with its supporting evidence (top cues per polarity,
//! sample quotes), serializable as camelCase JSON for an external panel.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::evidence::{top_cue_ids, top_cues, CueCount, SnippetSampler};
use crate::mention::MentionExtractor;
use crate::score::ScoreModel;

/// How many cues per polarity the report displays.
pub const TOP_CUES_DISPLAY: usize = 6;

/// Immutable scoring snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreReport {
    pub product_name: String,
    pub product_type: String,
    /// Blended score in `[0, 100]`.
    pub score: u8,
    /// Evidence-only score before blending.
    pub raw_score: u8,
    /// Sample-size confidence percentage.
    pub confidence: u8,
    /// Number of distinct reviews scored.
    pub total_reviews: usize,
    /// Top positive cues, most frequent first.
    pub top_positive_cues: Vec<CueCount>,
    /// Top negative cues, most frequent first.
    pub top_negative_cues: Vec<CueCount>,
    /// Illustrative sentences containing the top cues, in discovery order.
    pub sample_quotes: Vec<String>,
}

impl fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.product_name, self.product_type)?;
        writeln!(
            f,
            "score {} (raw {}, confidence {}%) from {} reviews",
            self.score, self.raw_score, self.confidence, self.total_reviews
        )?;
        for cue in &self.top_positive_cues {
            writeln!(f, "+ {} x{}", cue.phrase, cue.count)?;
        }
        for cue in &self.top_negative_cues {
            writeln!(f, "- {} x{}", cue.phrase, cue.count)?;
        }
        for quote in &self.sample_quotes {
            writeln!(f, "> {}", quote)?;
        }
        Ok(())
    }
}

/// Coarse score classification the presentation layer maps to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    /// Score of 75 or above.
    Favorable,
    /// Score between 55 and 74.
    Mixed,
    /// Score below 55.
    Unfavorable,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> ScoreBand {
        if score >= 75 {
            ScoreBand::Favorable
        } else if score >= 55 {
            ScoreBand::Mixed
        } else {
            ScoreBand::Unfavorable
        }
    }
}

/// Assemble a report from a score model and the corpus it was derived from.
///
/// Pure assembly: ranks the model's cue tallies (k = [`TOP_CUES_DISPLAY`]),
/// then samples quotes keyed by the union of the top positive and negative
/// phrases. No failure modes: all inputs are pre-validated structures.
pub fn build_report(
    product_name: &str,
    product_type: &str,
    model: &ScoreModel,
    reviews: &[String],
    extractor: &MentionExtractor,
    sampler: &SnippetSampler,
) -> ScoreReport {
    let lexicon = extractor.lexicon();
    let top_positive_cues = top_cues(&model.pos_counts, lexicon, TOP_CUES_DISPLAY);
    let top_negative_cues = top_cues(&model.neg_counts, lexicon, TOP_CUES_DISPLAY);

    let mut keys = BTreeSet::new();
    keys.extend(top_cue_ids(&model.pos_counts, TOP_CUES_DISPLAY));
    keys.extend(top_cue_ids(&model.neg_counts, TOP_CUES_DISPLAY));

    let sample_quotes = sampler.sample(reviews.iter().map(String::as_str), &keys, extractor);

    ScoreReport {
        product_name: product_name.to_string(),
        product_type: product_type.to_string(),
        score: model.score,
        raw_score: model.raw_score,
        confidence: model.confidence,
        total_reviews: reviews.len(),
        top_positive_cues,
        top_negative_cues,
        sample_quotes,
    }
}
