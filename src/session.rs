//! Host-owned scoring session: review accumulation plus the full pipeline.
//!
//! A [`ScoringSession`] is the explicit session object the host owns and
//! passes into core calls; there is no process-wide singleton here. It
//! accumulates distinct review texts for one product and recomputes the
//! entire pipeline (extraction, scoring, evidence selection, report) from
//! scratch on every [`ScoringSession::compute_report`] call.
//!
//! Execution is single-threaded and synchronous with no internal suspension
//! points; recomputation is idempotent and side-effect-free, so overlapping
//! external triggers are safe to serialize or drop (a newer run supersedes
//! an older one). A multi-threaded host must wrap the session in its own
//! lock so inserts synchronize with scoring passes.

use std::collections::HashSet;

use crate::error::{IngestError, LexiconResult};
use crate::evidence::SnippetSampler;
use crate::lexicon::Lexicon;
use crate::mention::{Mention, MentionExtractor};
use crate::product::ProductIdentity;
use crate::report::{build_report, ScoreReport};
use crate::score::{ScoreModel, Scorer};

/// Insertion-ordered set of distinct review texts for the current product.
///
/// Uniqueness is by exact string match. The corpus grows monotonically
/// within a product session and never shrinks except on [`ReviewCorpus::clear`].
#[derive(Debug, Clone, Default)]
pub struct ReviewCorpus {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl ReviewCorpus {
    pub fn new() -> ReviewCorpus {
        ReviewCorpus::default()
    }

    /// Insert a review text; returns `false` if it was already present.
    pub fn insert(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if self.seen.contains(&text) {
            return false;
        }
        self.seen.insert(text.clone());
        self.order.push(text);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        self.seen.contains(text)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Review texts in insertion order.
    pub fn reviews(&self) -> &[String] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

/// The scoring engine for one product session.
pub struct ScoringSession {
    extractor: MentionExtractor,
    scorer: Scorer,
    sampler: SnippetSampler,
    corpus: ReviewCorpus,
    product: Option<ProductIdentity>,
}

impl ScoringSession {
    /// Create a session over a custom lexicon.
    pub fn new(lexicon: Lexicon) -> LexiconResult<ScoringSession> {
        Ok(ScoringSession {
            extractor: MentionExtractor::new(lexicon)?,
            scorer: Scorer::new(),
            sampler: SnippetSampler::new(),
            corpus: ReviewCorpus::new(),
            product: None,
        })
    }

    /// Create a session over the built-in sensory lexicon.
    pub fn with_default_lexicon() -> LexiconResult<ScoringSession> {
        ScoringSession::new(Lexicon::sensory_default().clone())
    }

    /// Replace the scorer (smoothing/neutral tunables).
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the snippet sampler.
    pub fn with_sampler(mut self, sampler: SnippetSampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        self.extractor.lexicon()
    }

    pub fn corpus(&self) -> &ReviewCorpus {
        &self.corpus
    }

    /// Number of distinct reviews accumulated so far.
    pub fn review_count(&self) -> usize {
        self.corpus.len()
    }

    /// Identity of the product currently being tracked, if any.
    pub fn product(&self) -> Option<&ProductIdentity> {
        self.product.as_ref()
    }

    /// Add new distinct review texts to the corpus.
    ///
    /// Idempotent: re-adding an existing text is a no-op. Returns how many
    /// texts were newly added. Input need not be pre-trimmed or lowercased.
    pub fn ingest<I, S>(&mut self, texts: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = 0;
        for text in texts {
            if self.corpus.insert(text) {
                added += 1;
            }
        }
        added
    }

    /// Ingest untyped values from an external scraper boundary.
    ///
    /// Every entry must be a JSON string; the first non-string entry fails
    /// the whole batch with [`IngestError::InvalidInput`] naming the value,
    /// leaving the corpus untouched. This is the tagged-result boundary:
    /// nothing is thrown across it.
    pub fn ingest_values(&mut self, values: &[serde_json::Value]) -> Result<usize, IngestError> {
        let mut texts = Vec::with_capacity(values.len());
        for value in values {
            match value.as_str() {
                Some(text) => texts.push(text),
                None => {
                    return Err(IngestError::InvalidInput {
                        value: value.to_string(),
                    })
                }
            }
        }
        Ok(self.ingest(texts))
    }

    /// Reset the corpus when the detected product identity changes.
    ///
    /// Exact string inequality triggers the reset; returns whether one
    /// happened. Re-announcing the current product is a no-op.
    pub fn reset_for_new_product(&mut self, identity: impl Into<ProductIdentity>) -> bool {
        let identity = identity.into();
        match &self.product {
            Some(current) if *current == identity => false,
            _ => {
                self.product = Some(identity);
                self.corpus.clear();
                true
            }
        }
    }

    /// Extract mentions from every review and fold them into a score model.
    ///
    /// Pure function of the current corpus snapshot.
    pub fn compute_model(&self) -> ScoreModel {
        let mut mentions: Vec<Mention> = Vec::new();
        for review in self.corpus.iter() {
            mentions.extend(self.extractor.extract(review));
        }
        self.scorer.score(&mentions, self.corpus.len())
    }

    /// Run the full pipeline against the current corpus.
    ///
    /// Deterministic: an unchanged corpus produces an identical report.
    pub fn compute_report(&self, product_name: &str, product_type: &str) -> ScoreReport {
        let model = self.compute_model();
        build_report(
            product_name,
            product_type,
            &model,
            self.corpus.reviews(),
            &self.extractor,
            &self.sampler,
        )
    }
}
