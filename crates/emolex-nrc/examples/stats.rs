use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use emolex_nrc::{LoadMode, load_nrc_lexicon_with_mode, load_nrc_multilingual_with_mode};
use emolex_types::LexiconKind;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str =
    "usage: cargo run -p emolex-nrc --example stats -- <lexicon-file> <kind-or-language>";

fn main() -> Result<()> {
    init_tracing();

    let mut args = env::args().skip(1);
    let path = args.next().map(PathBuf::from).context(USAGE)?;
    let selector = args.next().context(USAGE)?;

    let start = Instant::now();
    // A known kind tag selects a single-language layout; anything else is
    // treated as a language column of a multilingual table.
    let lexicon = if LexiconKind::from_tag(&selector).is_some() {
        load_nrc_lexicon_with_mode(&path, &selector, LoadMode::Mmap)
            .with_context(|| format!("loading {} as `{}`", path.display(), selector))?
    } else {
        load_nrc_multilingual_with_mode(&path, &selector, LoadMode::Mmap)
            .with_context(|| format!("loading {} for language `{}`", path.display(), selector))?
    };
    info!("lexicon loaded in {} ms", start.elapsed().as_millis());

    println!("File      : {}", path.display());
    println!("Terms     : {}", lexicon.term_count());
    println!("Records   : {}", lexicon.record_count());
    println!("Categories: {}", lexicon.categories().len());

    let mut categories: Vec<&str> = lexicon.categories().iter().map(String::as_str).collect();
    categories.sort_unstable();
    for category in categories {
        let records = lexicon
            .iter()
            .flat_map(|(_, emotions)| emotions)
            .filter(|emotion| emotion.category == category)
            .count();
        println!("  {category:<12} {records} records");
    }

    // Spot-check a couple of common terms to confirm lookup.
    for term in ["happy", "abandon"] {
        println!("Term '{}' present? {}", term, lexicon.contains_term(term));
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}
