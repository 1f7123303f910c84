//! Load the NRC emotion-lexicon family into one uniform in-memory model.
//!
//! The published lexicons arrive in several incompatible flat-file layouts.
//! This crate detects nothing: the caller names the layout and the matching
//! parser reads the file, producing an [`emolex_types::Lexicon`] every
//! downstream scoring consumer can use without caring where it came from.
//!
//! # Formats
//! - `"emotion"` — generic word-emotion association table, delegated
//!   unchanged to [`emolex_loader::load_lexicon`].
//! - `"affect_intensity"` — per-term intensity scores whose column order
//!   varies per source file; rows are probed for the numeric column and
//!   unparsable rows are skipped.
//! - `"vad"` — Valence-Arousal-Dominance scores in a fixed 4-column layout;
//!   parsed strictly, any malformed row fails the call.
//! - [`load_nrc_multilingual`] — translation tables with named columns; the
//!   per-language terms collect scores for the four core emotions and
//!   duplicate (term, category) entries are averaged.
//!
//! Files are read through [`LoadMode`]: an owned buffer by default (the
//! files are small), or a memory map on request.
//!
//! This crate makes use of the NRC Word-Emotion Association Lexicon, the
//! NRC Affect Intensity Lexicon, and the NRC Valence, Arousal, and Dominance
//! Lexicon, created at the National Research Council Canada. See
//! <http://saifmohammad.com/WebPages/lexicons.html> for the data files and
//! their terms of use.
//!
//! # Example
//! ```no_run
//! use emolex_nrc::load_nrc_lexicon;
//!
//! # fn main() -> Result<(), emolex_nrc::LexiconError> {
//! let lexicon = load_nrc_lexicon("NRC-AffectIntensity-Lexicon.txt", "affect_intensity")?;
//! if let Some(emotions) = lexicon.emotions("happy") {
//!     for emotion in emotions {
//!         println!("{}: {}", emotion.category, emotion.value);
//!     }
//! }
//! # Ok(()) }
//! ```

mod affect;
mod error;
mod file;
mod multilingual;
mod vad;

use std::path::Path;

use emolex_types::{Lexicon, LexiconKind};

pub use crate::error::LexiconError;
pub use crate::file::LoadMode;

/// Load one of the three NRC lexicon layouts named by `kind`.
///
/// `kind` must be one of the tags understood by
/// [`LexiconKind::from_tag`](emolex_types::LexiconKind::from_tag); anything
/// else fails with [`LexiconError::UnsupportedLexiconType`] without touching
/// the filesystem. Reads the file into an owned buffer; use
/// [`load_nrc_lexicon_with_mode`] to memory-map instead.
pub fn load_nrc_lexicon(path: impl AsRef<Path>, kind: &str) -> Result<Lexicon, LexiconError> {
    load_nrc_lexicon_with_mode(path, kind, LoadMode::Owned)
}

/// Load one of the three NRC lexicon layouts, choosing the file-access
/// strategy.
///
/// The `"emotion"` branch delegates to [`emolex_loader::load_lexicon`],
/// which buffers its file itself; `mode` applies to the formats parsed in
/// this crate.
pub fn load_nrc_lexicon_with_mode(
    path: impl AsRef<Path>,
    kind: &str,
    mode: LoadMode,
) -> Result<Lexicon, LexiconError> {
    let Some(resolved) = LexiconKind::from_tag(kind) else {
        return Err(LexiconError::UnsupportedLexiconType(kind.to_string()));
    };
    let path = path.as_ref();
    match resolved {
        LexiconKind::Emotion => Ok(emolex_loader::load_lexicon(path)?),
        LexiconKind::AffectIntensity => affect::load_affect_intensity(path, mode),
        LexiconKind::Vad => vad::load_vad(path, mode),
    }
}

/// Load a multilingual translation table for one target `language`.
///
/// `language` must name a column of the file's header; when it does not,
/// every translated term reads as absent and the returned lexicon is empty.
/// Duplicate (term, category) entries are collapsed to their arithmetic
/// mean; scores of zero or below are dropped.
pub fn load_nrc_multilingual(
    path: impl AsRef<Path>,
    language: &str,
) -> Result<Lexicon, LexiconError> {
    load_nrc_multilingual_with_mode(path, language, LoadMode::Owned)
}

/// Load a multilingual translation table, choosing the file-access strategy.
pub fn load_nrc_multilingual_with_mode(
    path: impl AsRef<Path>,
    language: &str,
    mode: LoadMode,
) -> Result<Lexicon, LexiconError> {
    multilingual::load_multilingual(path.as_ref(), language, mode)
}
