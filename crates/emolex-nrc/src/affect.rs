//! Affect-intensity table parsing.
//!
//! Each row associates a term with a real-valued intensity for one of four
//! basic emotions. Published revisions of the table disagree on column
//! order: some ship `term<TAB>score<TAB>category`, others
//! `term<TAB>category<TAB>score`. The numeric column's position is the only
//! cue, so every row is probed before it is read.

use std::path::Path;
use std::str;

use emolex_types::{Emotion, Lexicon};

use crate::error::LexiconError;
use crate::file::{LoadMode, load_file, strip_cr};

/// Field layout detected for one affect-intensity row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ColumnOrder {
    TermScoreCategory,
    TermCategoryScore,
    Unparseable,
}

/// True iff the token reads as a floating-point literal under standard
/// decimal or scientific notation, surrounding whitespace ignored. Never
/// panics.
fn parses_as_float(token: &str) -> bool {
    token.trim().parse::<f64>().is_ok()
}

/// Probe the two candidate score columns of a 3-field row.
fn probe_column_order(second: &str, third: &str) -> ColumnOrder {
    if parses_as_float(second) {
        ColumnOrder::TermScoreCategory
    } else if parses_as_float(third) {
        ColumnOrder::TermCategoryScore
    } else {
        ColumnOrder::Unparseable
    }
}

/// Parse an affect-intensity file, tolerating headers and malformed rows.
pub(crate) fn load_affect_intensity(path: &Path, mode: LoadMode) -> Result<Lexicon, LexiconError> {
    let buf = load_file(path, mode)?;

    let mut lexicon = Lexicon::new();
    for raw_line in buf.as_slice().split(|b| *b == b'\n') {
        let line = strip_cr(raw_line);
        if line.is_empty() {
            continue;
        }
        // Rows that don't fit the 3-field numeric shape (headers, junk) are
        // noise, not errors.
        let Ok(line_str) = str::from_utf8(line) else {
            continue;
        };
        let fields: Vec<&str> = line_str.split('\t').collect();
        let &[term, second, third] = fields.as_slice() else {
            continue;
        };
        let (category, score) = match probe_column_order(second, third) {
            ColumnOrder::TermScoreCategory => (third, second),
            ColumnOrder::TermCategoryScore => (second, third),
            ColumnOrder::Unparseable => continue,
        };
        let Ok(value) = score.trim().parse::<f64>() else {
            continue;
        };
        lexicon.insert(Emotion::new(term, category, value));
    }
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_probe_accepts_standard_notations() {
        assert!(parses_as_float("0.88"));
        assert!(parses_as_float("-1.5"));
        assert!(parses_as_float("  0.5 "));
        assert!(parses_as_float("1e-3"));
        assert!(parses_as_float(".5"));
        assert!(parses_as_float("7"));
    }

    #[test]
    fn float_probe_rejects_everything_else() {
        assert!(!parses_as_float("joy"));
        assert!(!parses_as_float(""));
        assert!(!parses_as_float("0.88x"));
        assert!(!parses_as_float("1,5"));
    }

    #[test]
    fn probe_prefers_the_second_column() {
        assert_eq!(
            probe_column_order("0.88", "joy"),
            ColumnOrder::TermScoreCategory
        );
        assert_eq!(
            probe_column_order("joy", "0.88"),
            ColumnOrder::TermCategoryScore
        );
        // Both numeric: the second column wins, matching the older layout.
        assert_eq!(
            probe_column_order("0.88", "0.5"),
            ColumnOrder::TermScoreCategory
        );
        assert_eq!(probe_column_order("joy", "high"), ColumnOrder::Unparseable);
    }
}
