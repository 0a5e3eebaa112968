//! Weighted sensory phrase lexicon and negation set.
//!
//! A [`Lexicon`] is the static configuration of the scoring engine: a list of
//! weighted phrases, each either a positive ([`Polarity::Good`]) or negative
//! ([`Polarity::Bad`]) sensory cue, plus the set of negation tokens that
//! invert a cue's effective polarity.
//!
//! Phrases are interned at load time: every phrase gets a [`PhraseId`] (its
//! index into the lexicon), and all downstream counters are keyed by id
//! rather than by raw strings. A phrase appearing in both polarity lists is
//! a configuration error and is rejected when the lexicon is built.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{LexiconError, LexiconResult};
use crate::text::normalize;

/// Whether a phrase is inherently a positive or negative sensory cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// Positive sensory cue ("fragrance-free", "lightweight", ...).
    Good,
    /// Negative sensory cue ("sticky", "irritating", ...).
    Bad,
}

impl Polarity {
    /// The opposite polarity, applied when a mention is negated.
    pub fn invert(self) -> Polarity {
        match self {
            Polarity::Good => Polarity::Bad,
            Polarity::Bad => Polarity::Good,
        }
    }
}

/// Interned identifier of a lexicon phrase (its index in lexicon order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhraseId(pub(crate) usize);

impl PhraseId {
    /// Index of this phrase in the lexicon.
    pub fn index(self) -> usize {
        self.0
    }
}

/// One weighted phrase in the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// Lowercase, whitespace-normalized phrase text.
    pub phrase: String,
    /// Positive weight contributed by each occurrence.
    pub weight: u32,
    /// Inherent polarity of the phrase.
    pub polarity: Polarity,
}

impl LexiconEntry {
    /// Create an entry, lowercasing and whitespace-normalizing the phrase.
    pub fn new(phrase: &str, weight: u32, polarity: Polarity) -> LexiconEntry {
        LexiconEntry {
            phrase: normalize(phrase).to_lowercase(),
            weight,
            polarity,
        }
    }
}

/// Immutable table of weighted sensory phrases plus the negation-token set.
///
/// Built once at startup and shared for the lifetime of a scoring session.
#[derive(Debug, Clone)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    negations: HashSet<String>,
}

impl Lexicon {
    /// Build a lexicon from entries and negation tokens.
    ///
    /// Rejects empty phrases, zero weights, and duplicate phrases. The
    /// duplicate check spans both polarities: a phrase listed as both Good
    /// and Bad has no well-defined effect on the score, so it is refused
    /// here instead of being resolved arbitrarily at match time.
    pub fn new<E, N>(entries: E, negations: N) -> LexiconResult<Lexicon>
    where
        E: IntoIterator<Item = LexiconEntry>,
        N: IntoIterator<Item = String>,
    {
        let entries: Vec<LexiconEntry> = entries.into_iter().collect();

        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &entries {
            if entry.phrase.is_empty() {
                return Err(LexiconError::EmptyPhrase);
            }
            if entry.weight == 0 {
                return Err(LexiconError::ZeroWeight {
                    phrase: entry.phrase.clone(),
                });
            }
            if !seen.insert(entry.phrase.as_str()) {
                return Err(LexiconError::DuplicatePhrase {
                    phrase: entry.phrase.clone(),
                });
            }
        }

        let negations = negations
            .into_iter()
            .map(|token| token.to_lowercase())
            .collect();

        Ok(Lexicon { entries, negations })
    }

    /// The built-in sensory lexicon used when the host does not supply one.
    ///
    /// Covers scent, texture, and irritation cues for beauty products, with
    /// weights between 1 (mild cue) and 4 (strong irritation signal).
    pub fn sensory_default() -> &'static Lexicon {
        &SENSORY_DEFAULT
    }

    /// Number of phrases in the lexicon.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in lexicon order (the order that defines [`PhraseId`]s).
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Entry for an interned phrase id.
    pub fn entry(&self, id: PhraseId) -> &LexiconEntry {
        &self.entries[id.0]
    }

    /// Phrase text for an interned phrase id.
    pub fn phrase(&self, id: PhraseId) -> &str {
        &self.entries[id.0].phrase
    }

    /// Look up a phrase's id by its exact normalized text.
    pub fn id_of(&self, phrase: &str) -> Option<PhraseId> {
        self.entries
            .iter()
            .position(|entry| entry.phrase == phrase)
            .map(PhraseId)
    }

    /// Iterator over phrase texts in lexicon order.
    pub(crate) fn phrases(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.phrase.as_str())
    }

    /// Whether a token (already lowercased by extraction) is a negation word.
    pub fn is_negation(&self, token: &str) -> bool {
        self.negations.contains(token)
    }

    /// Number of negation tokens.
    pub fn negation_count(&self) -> usize {
        self.negations.len()
    }
}

// Default sensory cue tables. Weights follow the severity of the cue:
// irritation signals outweigh texture complaints, which outweigh mild
// descriptors.
const DEFAULT_GOOD: &[(&str, u32)] = &[
    ("fragrance-free", 3),
    ("unscented", 3),
    ("no scent", 2),
    ("odorless", 2),
    ("lightweight", 2),
    ("light weight", 2),
    ("non-sticky", 2),
    ("not sticky", 2),
    ("non greasy", 2),
    ("non-greasy", 2),
    ("non oily", 2),
    ("non-oily", 2),
    ("not greasy", 2),
    ("not oily", 2),
    ("non irritating", 3),
    ("non-irritating", 3),
    ("gentle", 2),
    ("soothing", 2),
    ("calming", 2),
    ("soft", 1),
    ("smooth", 1),
    ("hydrating", 1),
    ("moisturizing", 1),
    ("breathable", 2),
    ("comfortable", 2),
    ("blendable", 1),
    ("buildable", 1),
    ("no white cast", 3),
    ("no residue", 2),
    ("quick-drying", 1),
    ("dries quickly", 1),
    ("weightless", 2),
    ("flexible", 1),
    ("silky", 1),
];

const DEFAULT_BAD: &[(&str, u32)] = &[
    ("fragrance", 3),
    ("scented", 3),
    ("perfume", 3),
    ("perfumey", 3),
    ("strong scent", 3),
    ("overpowering", 3),
    ("chemical smell", 3),
    ("alcohol smell", 2),
    ("sticky", 3),
    ("tacky", 3),
    ("greasy", 3),
    ("oily", 3),
    ("heavy", 3),
    ("thick", 2),
    ("clumpy", 2),
    ("cakey", 2),
    ("chalky", 2),
    ("dusty", 2),
    ("flaky", 2),
    ("patchy", 2),
    ("pilling", 2),
    ("tight", 2),
    ("irritating", 4),
    ("irritation", 4),
    ("itchy", 3),
    ("burning", 4),
    ("stinging", 4),
    ("tingling", 3),
    ("redness", 2),
    ("breakouts", 2),
    ("breakout", 2),
];

const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "isn't", "wasn't", "aren't", "don't", "doesn't", "didn't",
];

static SENSORY_DEFAULT: Lazy<Lexicon> = Lazy::new(|| {
    // Constructed directly: the tables above are known-valid, so the
    // fallible validation path is unnecessary here.
    let mut entries = Vec::with_capacity(DEFAULT_GOOD.len() + DEFAULT_BAD.len());
    for &(phrase, weight) in DEFAULT_GOOD {
        entries.push(LexiconEntry {
            phrase: phrase.to_string(),
            weight,
            polarity: Polarity::Good,
        });
    }
    for &(phrase, weight) in DEFAULT_BAD {
        entries.push(LexiconEntry {
            phrase: phrase.to_string(),
            weight,
            polarity: Polarity::Bad,
        });
    }
    let negations = DEFAULT_NEGATIONS.iter().map(|t| t.to_string()).collect();
    Lexicon { entries, negations }
});
