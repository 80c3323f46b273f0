//! Vocabulary harvesting for the interactive prompt.
//! Scans the file names in one directory and extracts words worth offering
//! as suggestions when the user types the text to insert.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

/// Words shorter than this carry too little meaning to suggest.
const MIN_WORD_CHARS: usize = 4;

/// Lowercase file-name noise that never makes a useful suggestion.
const NOISE_WORDS: &[&str] = &["copy", "draft", "final", "image", "scan", "temp", "untitled"];

/// Collect suggestion words from the names of the regular files directly
/// inside `dir`.
///
/// Each file stem is split into maximal alphabetic runs; runs of fewer than
/// four characters and noise words are dropped. The result is sorted and
/// deduplicated. Unreadable entries are skipped silently; an empty result is
/// fine and simply disables the suggestion hint.
pub fn harvest(dir: &Path) -> Vec<String> {
    let mut words = BTreeSet::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
    {
        let Some(stem) = entry.path().file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        for word in stem.split(|c: char| !c.is_alphabetic()) {
            if word.chars().count() < MIN_WORD_CHARS {
                continue;
            }
            if NOISE_WORDS.contains(&word.to_lowercase().as_str()) {
                continue;
            }
            words.insert(word.to_string());
        }
    }

    debug!("harvested {} vocabulary words from {}", words.len(), dir.display());
    words.into_iter().collect()
}
