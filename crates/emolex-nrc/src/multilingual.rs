//! Multilingual translation-table parsing and aggregation.
//!
//! The table has named columns: one column per target language holding the
//! translated term, plus the four source-language emotion columns `joy`,
//! `fear`, `anger`, `sadness` holding scores. Several distinct source terms
//! often share one translation, so a translated term can collect multiple
//! scores for the same emotion; the aggregation pass collapses each
//! (term, category) group to its arithmetic mean.

use std::collections::HashMap;
use std::path::Path;

use emolex_types::{Emotion, Lexicon};

use crate::error::LexiconError;
use crate::file::{LoadMode, load_file};

/// The four source-language emotions carried by the translation table.
const CORE_EMOTIONS: [&str; 4] = ["joy", "fear", "anger", "sadness"];

/// Parse a multilingual table for one target language.
pub(crate) fn load_multilingual(
    path: &Path,
    language: &str,
    mode: LoadMode,
) -> Result<Lexicon, LexiconError> {
    let buf = load_file(path, mode)?;
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(buf.as_slice());

    let headers = reader.headers()?.clone();
    let Some(term_idx) = headers.iter().position(|h| h == language) else {
        // No column for the requested language: every translated term reads
        // as absent.
        return Ok(Lexicon::new());
    };
    let emotion_columns: Vec<(usize, &str)> = CORE_EMOTIONS
        .iter()
        .filter_map(|name| headers.iter().position(|h| h == *name).map(|idx| (idx, *name)))
        .collect();

    let mut raw: HashMap<String, Vec<Emotion>> = HashMap::new();
    for record in reader.records() {
        // Undecodable rows are noise, not errors.
        let Ok(record) = record else {
            continue;
        };
        let term = record.get(term_idx).unwrap_or("").trim();
        if term.is_empty() {
            continue;
        }
        for &(idx, name) in &emotion_columns {
            let score = record
                .get(idx)
                .and_then(|cell| cell.trim().parse::<f64>().ok())
                .unwrap_or(0.0);
            if score > 0.0 {
                raw.entry(term.to_string())
                    .or_default()
                    .push(Emotion::new(term, name, score));
            }
        }
    }
    Ok(aggregate_emotions(raw))
}

/// Collapse duplicate (term, category) records to their arithmetic mean.
///
/// Categories keep their first-appearance order per term; terms with a
/// single score per category pass through with the same value.
fn aggregate_emotions(raw: HashMap<String, Vec<Emotion>>) -> Lexicon {
    let mut lexicon = Lexicon::new();
    for (term, emotions) in raw {
        let mut grouped: Vec<(String, Vec<f64>)> = Vec::new();
        for emotion in emotions {
            match grouped
                .iter_mut()
                .find(|(category, _)| *category == emotion.category)
            {
                Some((_, values)) => values.push(emotion.value),
                None => grouped.push((emotion.category, vec![emotion.value])),
            }
        }
        for (category, values) in grouped {
            lexicon.insert(Emotion::new(term.clone(), category, mean(&values)));
        }
    }
    lexicon
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregation_averages_per_category() {
        let mut raw: HashMap<String, Vec<Emotion>> = HashMap::new();
        raw.insert(
            "ánimo".to_string(),
            vec![
                Emotion::new("ánimo", "joy", 0.6),
                Emotion::new("ánimo", "anger", 0.2),
                Emotion::new("ánimo", "joy", 0.8),
            ],
        );

        let lexicon = aggregate_emotions(raw);
        let emotions = lexicon.emotions("ánimo").unwrap();
        assert_eq!(emotions.len(), 2);
        assert_eq!(emotions[0].category, "joy");
        assert!((emotions[0].value - 0.7).abs() < 1e-9);
        assert_eq!(emotions[1].category, "anger");
        assert_eq!(emotions[1].value, 0.2);
    }

    #[test]
    fn mean_of_one_value_is_that_value() {
        assert_eq!(mean(&[0.42]), 0.42);
        assert!((mean(&[0.25, 0.75]) - 0.5).abs() < 1e-12);
    }
}
