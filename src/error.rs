//! Error types for lexicon loading and the untyped ingest boundary.
//!
//! The scoring pipeline itself is total over its input domain: every
//! operation accepts any string (including empty) and returns a well-formed
//! result. Errors exist only at configuration time (building a [`crate::Lexicon`])
//! and when accepting untyped values from an external scraper.

use thiserror::Error;

/// Errors that can occur while building a lexicon or its phrase matcher.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The same phrase appears more than once across the positive and
    /// negative lists. Rejected at load time rather than leaving the
    /// polarity of its mentions implementation-defined.
    #[error("duplicate phrase in lexicon: {phrase:?}")]
    DuplicatePhrase { phrase: String },

    /// A phrase normalized to the empty string.
    #[error("empty phrase in lexicon")]
    EmptyPhrase,

    /// A phrase was given a zero weight; weights must be positive.
    #[error("phrase {phrase:?} has zero weight")]
    ZeroWeight { phrase: String },

    /// The multi-pattern automaton could not be compiled.
    #[error("failed to build phrase matcher: {message}")]
    Matcher { message: String },
}

/// Errors reported back across the ingest boundary.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A review entry was not a string. The offending value is echoed back
    /// so the external scraper can locate it.
    #[error("invalid review entry (expected string): {value}")]
    InvalidInput { value: String },
}

/// Result type for lexicon construction.
pub type LexiconResult<T> = Result<T, LexiconError>;
