//! Generic word-emotion lexicon loading.
//!
//! Reads the plain three-column association layout shared by word-emotion
//! tables: one `term<TAB>category<TAB>score` row per line, where the score is
//! usually a 0/1 presence flag but any real value works. Rows with a positive
//! score become one [`Emotion`] record each; zero and negative scores mean
//! "no association" and are recorded nowhere. The crate is deliberately
//! ignorant of any particular lexicon family; format-specific loaders
//! delegate to it when their layout matches.
//!
//! Malformed rows (wrong field count, unparsable score) are treated as noise
//! and skipped, so a file with a stray header still loads.
//!
//! # Example
//! ```no_run
//! # fn main() -> anyhow::Result<()> {
//! let lexicon = emolex_loader::load_lexicon("wordlevel-associations.txt")?;
//! for (term, emotions) in lexicon.iter() {
//!     println!("{}: {} associations", term, emotions.len());
//! }
//! # Ok(()) }
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use emolex_types::{Emotion, Lexicon};

/// Load a three-column word-emotion association file.
///
/// Returns a [`Lexicon`] holding every positively-scored association, with
/// the category set populated from the rows that were kept.
pub fn load_lexicon(path: impl AsRef<Path>) -> Result<Lexicon> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("open lexicon file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut lexicon = Lexicon::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("read line {} in {}", lineno + 1, path.display()))?;
        let mut fields = line.split('\t');
        let (Some(term), Some(category), Some(score)) =
            (fields.next(), fields.next(), fields.next())
        else {
            continue;
        };
        if fields.next().is_some() {
            continue;
        }
        let Ok(value) = score.trim().parse::<f64>() else {
            continue;
        };
        if value > 0.0 {
            lexicon.insert(Emotion::new(term, category, value));
        }
    }
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn write_lexicon(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("lexicon.txt");
        fs::write(&path, contents).expect("write lexicon file");
        (dir, path)
    }

    #[test]
    fn keeps_positive_associations_only() {
        let (_dir, path) = write_lexicon(
            "abandon\tanger\t1\nabandon\tjoy\t0\ncherish\tjoy\t1\ncherish\ttrust\t1\n",
        );
        let lexicon = load_lexicon(&path).unwrap();

        assert_eq!(lexicon.term_count(), 2);
        let abandon = lexicon.emotions("abandon").unwrap();
        assert_eq!(abandon.len(), 1);
        assert_eq!(abandon[0].category, "anger");
        assert_eq!(lexicon.emotions("cherish").unwrap().len(), 2);
        // "joy" is still a known category via cherish; the zero-score abandon
        // row contributed nothing.
        assert!(lexicon.categories().contains("joy"));
        assert!(lexicon.categories().contains("trust"));
    }

    #[test]
    fn skips_malformed_rows() {
        let (_dir, path) = write_lexicon(
            "word\taffect\tscore\nhappy\tjoy\t0.8\nbroken line without tabs\nhappy\tjoy\n",
        );
        let lexicon = load_lexicon(&path).unwrap();

        assert_eq!(lexicon.term_count(), 1);
        assert_eq!(lexicon.emotions("happy").unwrap().len(), 1);
        assert_eq!(lexicon.categories().len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_lexicon("definitely/not/here.txt").unwrap_err();
        assert!(err.to_string().contains("open lexicon file"));
    }
}
