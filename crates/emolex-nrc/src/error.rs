use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the NRC lexicon loaders.
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The dispatch tag is not one of the known lexicon types. Checked
    /// before any file access, so a bogus tag fails the same way for every
    /// path.
    #[error("unsupported NRC lexicon type `{0}`")]
    UnsupportedLexiconType(String),

    /// A row in a strict-layout file did not match the expected shape.
    /// `line` is 1-based.
    #[error("{}:{line}: {reason}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Failure reported by the generic association loader the `emotion`
    /// branch delegates to, passed through unchanged.
    #[error(transparent)]
    Generic(#[from] anyhow::Error),
}
