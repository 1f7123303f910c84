//! Smoke tests against the published NRC files, which are distributed under
//! their own terms and not committed here. Point `NRC_LEXICON_DIR` at a
//! directory holding the downloaded lexicons to run them.

use std::env;
use std::path::PathBuf;

use emolex_nrc::{LoadMode, load_nrc_lexicon_with_mode};

fn lexicon_dir() -> Option<PathBuf> {
    env::var("NRC_LEXICON_DIR").ok().map(PathBuf::from)
}

#[test]
fn loads_published_affect_intensity_lexicon() {
    let Some(dir) = lexicon_dir() else {
        eprintln!("skipping: NRC_LEXICON_DIR not set");
        return;
    };
    let path = dir.join("NRC-AffectIntensity-Lexicon.txt");
    if !path.exists() {
        eprintln!("skipping: {} not present", path.display());
        return;
    }

    let lexicon = load_nrc_lexicon_with_mode(&path, "affect_intensity", LoadMode::Mmap)
        .expect("load affect intensity lexicon");
    assert!(lexicon.term_count() > 1_000, "lexicon too small");
    assert_eq!(lexicon.categories().len(), 4);
}

#[test]
fn loads_published_vad_lexicon() {
    let Some(dir) = lexicon_dir() else {
        eprintln!("skipping: NRC_LEXICON_DIR not set");
        return;
    };
    let path = dir.join("NRC-VAD-Lexicon.txt");
    if !path.exists() {
        eprintln!("skipping: {} not present", path.display());
        return;
    }

    let lexicon =
        load_nrc_lexicon_with_mode(&path, "vad", LoadMode::Mmap).expect("load vad lexicon");
    assert!(lexicon.term_count() > 10_000, "lexicon too small");
    assert!(lexicon.record_count() >= lexicon.term_count() * 3);
    assert!(lexicon.contains_term("achieve"));
}
