//! Valence-Arousal-Dominance table parsing.
//!
//! Fixed layout: one header row, then `term<TAB>valence<TAB>arousal<TAB>
//! dominance` with all three scores always present. There is no structural
//! ambiguity to reconcile, so unlike the affect-intensity parser this one is
//! strict: any data row that does not match the shape fails the whole call.

use std::path::Path;
use std::str;

use emolex_types::{Emotion, Lexicon};

use crate::error::LexiconError;
use crate::file::{LoadMode, load_file, strip_cr};

/// The three affective dimensions, in file column order.
const VAD_CATEGORIES: [&str; 3] = ["valence", "arousal", "dominance"];

/// Parse a VAD file. The category set is always exactly the three
/// dimensions, even for a header-only file.
pub(crate) fn load_vad(path: &Path, mode: LoadMode) -> Result<Lexicon, LexiconError> {
    let buf = load_file(path, mode)?;

    let mut lexicon = Lexicon::new();
    for name in VAD_CATEGORIES {
        lexicon.add_category(name);
    }

    for (lineno, raw_line) in buf.as_slice().split(|b| *b == b'\n').enumerate() {
        if lineno == 0 {
            continue; // header row
        }
        let line = strip_cr(raw_line);
        if line.is_empty() {
            continue;
        }
        let line_str = str::from_utf8(line)
            .map_err(|_| malformed(path, lineno + 1, "row is not valid UTF-8"))?;
        let fields: Vec<&str> = line_str.split('\t').collect();
        let &[term, valence, arousal, dominance] = fields.as_slice() else {
            return Err(malformed(
                path,
                lineno + 1,
                format!("expected 4 tab-separated fields, got {}", fields.len()),
            ));
        };
        for (category, score) in VAD_CATEGORIES.iter().zip([valence, arousal, dominance]) {
            let value = score.trim().parse::<f64>().map_err(|_| {
                malformed(path, lineno + 1, format!("invalid {category} score `{score}`"))
            })?;
            lexicon.insert(Emotion::new(term, *category, value));
        }
    }
    Ok(lexicon)
}

fn malformed(path: &Path, line: usize, reason: impl Into<String>) -> LexiconError {
    LexiconError::MalformedRow {
        path: path.to_path_buf(),
        line,
        reason: reason.into(),
    }
}
