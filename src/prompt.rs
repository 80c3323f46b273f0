//! Interactive acquisition of the text to insert.
//!
//! Used when --text is absent. Harvested vocabulary words are shown as
//! suggestions before the prompt; the prompt itself goes to stderr so stdout
//! stays reserved for the rename results.

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result};

/// How many suggestion words are spelled out before we only report a count.
const MAX_LISTED_SUGGESTIONS: usize = 8;

/// Ask the user for the text to insert. Returns None when the answer is
/// empty (including EOF on a pipe), which callers treat as "nothing to do".
pub fn ask_for_text(vocabulary: &[String]) -> Result<Option<String>> {
    if io::stderr().is_terminal() {
        print_suggestions(vocabulary);
    }

    eprint!("Text to insert (empty input aborts): ");
    io::stderr().flush().ok();

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the text from stdin")?;

    let text = line.trim();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(text.to_string()))
}

fn print_suggestions(vocabulary: &[String]) {
    if vocabulary.is_empty() {
        return;
    }
    if vocabulary.len() <= MAX_LISTED_SUGGESTIONS {
        eprintln!(
            "Words seen in this directory: {}",
            vocabulary.join(", ")
        );
    } else {
        eprintln!(
            "Words seen in this directory ({} total): {}, ...",
            vocabulary.len(),
            vocabulary[..MAX_LISTED_SUGGESTIONS].join(", ")
        );
    }
}
