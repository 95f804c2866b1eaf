//! Lexicon loading utilities
//!
//! Every loader keeps only entries that are exactly five ASCII letters,
//! lowercases them, and drops repeats while preserving first-seen order.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("lexicon.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let file = File::open(path.as_ref())?;
    let words = load_from_reader(BufReader::new(file))?;
    debug!(path = %path.as_ref().display(), words = words.len(), "lexicon loaded");
    Ok(words)
}

/// Load words from any line-oriented reader
///
/// Only the first whitespace-separated field of each line is used, so
/// frequency-annotated lists (`crane 1234`) load as plain words.
///
/// # Errors
///
/// Returns an I/O error if reading fails.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line?);
    }
    Ok(collect_words(lines.iter().filter_map(|line| line.split_whitespace().next())))
}

/// Convert a string slice to a Word vector
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::words_from_slice;
/// use wordle_solver::wordlists::LEXICON;
///
/// let words = words_from_slice(LEXICON);
/// assert_eq!(words.len(), LEXICON.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    collect_words(slice.iter().copied())
}

fn collect_words<'s>(entries: impl Iterator<Item = &'s str>) -> Vec<Word> {
    let mut seen = FxHashSet::default();
    let mut skipped = 0usize;

    let words: Vec<Word> = entries
        .filter_map(|entry| {
            let word = Word::new(entry).ok();
            if word.is_none() {
                skipped += 1;
            }
            word
        })
        .filter(|word| seen.insert(word.clone()))
        .collect();

    if skipped > 0 {
        debug!(skipped, kept = words.len(), "skipped entries that are not five letters");
    }
    words
}
