//! Lexicons for Wordle solving
//!
//! Provides an embedded lexicon compiled into the binary, and loaders for
//! lexicon files.

mod embedded;
pub mod loader;

pub use embedded::{LEXICON, LEXICON_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_count_matches_const() {
        assert_eq!(LEXICON.len(), LEXICON_COUNT);
    }

    #[test]
    fn lexicon_words_are_valid() {
        for &word in LEXICON {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn lexicon_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = LEXICON.iter().collect();
        assert_eq!(unique.len(), LEXICON.len());
    }

    #[test]
    fn lexicon_contains_common_openers() {
        for word in ["crane", "slate", "trace", "raise", "arise"] {
            assert!(LEXICON.contains(&word), "missing {word}");
        }
    }
}
