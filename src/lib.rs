//! Lexicon-based sensory quality scoring for product reviews.
//!
//! This crate turns a growing, unordered stream of free-text product
//! reviews into a single sensory quality score with supporting evidence,
//! recomputed in full on every incremental update.
//!
//! ## Pipeline
//!
//! - [`Lexicon`] - static table of weighted sensory phrases plus negation words
//! - [`MentionExtractor`] - finds whole-word phrase occurrences and resolves negation
//! - [`Scorer`] - folds mentions and review count into a bounded [`ScoreModel`]
//! - [`top_cues`] / [`SnippetSampler`] - ranks cue frequencies and samples quotes
//! - [`build_report`] - assembles the immutable [`ScoreReport`] for presentation
//!
//! ## Session
//!
//! The host owns a [`ScoringSession`]: it accumulates distinct review texts
//! for one product ([`ScoringSession::ingest`]), resets when the product
//! identity changes ([`ScoringSession::reset_for_new_product`]), and runs
//! the whole pipeline on demand ([`ScoringSession::compute_report`]).
//! Fetching pages, scraping review strings, and rendering the score panel
//! are external collaborators' responsibilities; the core consumes plain
//! strings and produces [`ScoreReport`] values only.
//!
//! ## Example
//!
//! ```
//! use sensory_score::ScoringSession;
//!
//! let mut session = ScoringSession::with_default_lexicon().unwrap();
//! session.reset_for_new_product("Soft Pinch Liquid Blush");
//! session.ingest(vec![
//!     "This is fragrance-free and light.",
//!     "Feels sticky and heavy.",
//! ]);
//!
//! let report = session.compute_report("Soft Pinch Liquid Blush", "liquid blush");
//! assert_eq!(report.raw_score, 27);
//! assert_eq!(report.total_reviews, 2);
//! ```

mod error;
mod evidence;
mod lexicon;
mod matcher;
mod mention;
mod product;
mod report;
mod score;
mod session;
mod text;

pub use error::{IngestError, LexiconError, LexiconResult};
pub use evidence::{top_cues, CueCount, SnippetSampler, DEFAULT_TOP_CUES};
pub use lexicon::{Lexicon, LexiconEntry, PhraseId, Polarity};
pub use mention::{Mention, MentionExtractor};
pub use product::{infer_product_type, ProductIdentity};
pub use report::{build_report, ScoreBand, ScoreReport, TOP_CUES_DISPLAY};
pub use score::{confidence_percent, CueTally, ScoreModel, Scorer};
pub use session::{ReviewCorpus, ScoringSession};
pub use text::{normalize, split_sentences};
