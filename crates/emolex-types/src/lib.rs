//! Shared value types for term-to-emotion association data.
//!
//! An emotion lexicon maps terms to scored associations with named categories
//! (emotions such as "joy" or affective dimensions such as "valence"). The
//! types here are the uniform in-memory model every loader produces and every
//! downstream scoring consumer reads: [`Emotion`] is one scored association,
//! [`Lexicon`] is the term-indexed aggregate, and [`LexiconKind`] names the
//! supported source-file layouts.
//!
//! [`Lexicon`] access is intentionally read-only (no `pub` fields), leaving
//! room to evolve internal storage while keeping a stable API surface;
//! [`Lexicon::insert`] is the single mutator loaders use during construction
//! and it upholds the container invariants (records are keyed by their own
//! term, every stored category is registered).
//!
//! ```rust
//! use emolex_types::{Emotion, Lexicon, LexiconKind};
//!
//! let mut lexicon = Lexicon::new();
//! lexicon.insert(Emotion::new("happy", "joy", 0.88));
//!
//! assert_eq!(lexicon.emotions("happy").unwrap()[0].value, 0.88);
//! assert!(lexicon.categories().contains("joy"));
//! assert_eq!(LexiconKind::from_tag("vad"), Some(LexiconKind::Vad));
//! ```

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// One scored term-to-category association.
///
/// A term may carry any number of these; records have no identity beyond
/// their three fields. `value` is the association strength in whatever range
/// the source file uses (typically `0.0..=1.0`, signed reals for VAD).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emotion {
    pub term: String,
    pub category: String,
    pub value: f64,
}

impl Emotion {
    pub fn new(term: impl Into<String>, category: impl Into<String>, value: f64) -> Self {
        Self {
            term: term.into(),
            category: category.into(),
            value,
        }
    }
}

/// Term-indexed collection of [`Emotion`] records plus the set of categories
/// observed while building it.
///
/// Constructed once per file-load call and handed to the caller as a
/// read-only value. Map iteration order is unspecified; the per-term record
/// order is the order of insertion.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Lexicon {
    emotion_mapping: HashMap<String, Vec<Emotion>>,
    categories: HashSet<String>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the list keyed by its own term and register its
    /// category.
    pub fn insert(&mut self, emotion: Emotion) {
        self.categories.insert(emotion.category.clone());
        self.emotion_mapping
            .entry(emotion.term.clone())
            .or_default()
            .push(emotion);
    }

    /// Register a category that may have no records (fixed-layout formats
    /// report their full category set even for an empty file).
    pub fn add_category(&mut self, name: impl Into<String>) {
        self.categories.insert(name.into());
    }

    /// All records for a term, in insertion order.
    pub fn emotions(&self, term: &str) -> Option<&[Emotion]> {
        self.emotion_mapping.get(term).map(Vec::as_slice)
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.emotion_mapping.contains_key(term)
    }

    /// Iterate over the terms in the mapping.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.emotion_mapping.keys().map(String::as_str)
    }

    /// Iterate over `(term, records)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Emotion])> {
        self.emotion_mapping
            .iter()
            .map(|(term, emotions)| (term.as_str(), emotions.as_slice()))
    }

    /// Every distinct category encountered while building the lexicon.
    pub fn categories(&self) -> &HashSet<String> {
        &self.categories
    }

    /// Number of distinct terms.
    pub fn term_count(&self) -> usize {
        self.emotion_mapping.len()
    }

    /// Total number of records across all terms.
    pub fn record_count(&self) -> usize {
        self.emotion_mapping.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.emotion_mapping.is_empty()
    }
}

/// Tag naming one of the supported lexicon file layouts.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum LexiconKind {
    /// Generic word-emotion association table.
    Emotion,
    /// Affect-intensity table (column order varies per source file).
    AffectIntensity,
    /// Valence-Arousal-Dominance table.
    Vad,
}

impl LexiconKind {
    /// Parse the caller-facing tag into an enum.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "emotion" => Some(LexiconKind::Emotion),
            "affect_intensity" => Some(LexiconKind::AffectIntensity),
            "vad" => Some(LexiconKind::Vad),
            _ => None,
        }
    }

    /// Emit the caller-facing tag.
    pub fn tag(self) -> &'static str {
        match self {
            LexiconKind::Emotion => "emotion",
            LexiconKind::AffectIntensity => "affect_intensity",
            LexiconKind::Vad => "vad",
        }
    }
}

impl fmt::Display for LexiconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
