//! Positional letter-frequency scoring
//!
//! Each word scores the sum, over its five positions, of how many words in the
//! pool share its letter at that position. Greedy and cheap: it does not model
//! the feedback a guess would produce, only how typical its letters are.

use crate::core::{ALPHABET_SIZE, WORD_LENGTH, Word};
use rayon::prelude::*;
use tracing::debug;

/// Default pool size above which only letter-unique words are ranked
pub const DEFAULT_UNIQUE_THRESHOLD: usize = 1000;

/// Letter counts per position: `table[position][letter]`
pub type FrequencyTable = [[usize; ALPHABET_SIZE]; WORD_LENGTH];

/// A ranked word and its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: usize,
}

/// Result of ranking a pool
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    /// Words in descending score order, ties in pool order
    pub words: Vec<ScoredWord<'a>>,
    /// Whether duplicate-letter words were left out
    pub restricted: bool,
}

impl<'a> Ranking<'a> {
    /// Highest-scoring word
    #[must_use]
    pub fn best(&self) -> Option<&'a Word> {
        self.words.first().map(|scored| scored.word)
    }

    /// Number of words that were ranked
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Ranks candidate pools by positional letter frequency
#[derive(Debug, Clone, Copy)]
pub struct GuessScorer {
    unique_threshold: usize,
}

impl Default for GuessScorer {
    fn default() -> Self {
        Self::new(DEFAULT_UNIQUE_THRESHOLD)
    }
}

impl GuessScorer {
    /// Create a scorer
    ///
    /// # Parameters
    /// - `unique_threshold`: when the pool holds more letter-unique words than
    ///   this, duplicate-letter words are not considered
    #[must_use]
    pub const fn new(unique_threshold: usize) -> Self {
        Self { unique_threshold }
    }

    #[must_use]
    pub const fn unique_threshold(&self) -> usize {
        self.unique_threshold
    }

    /// Rank a pool, best guess first
    ///
    /// While the pool is large, duplicate-letter words are dropped so every
    /// guess probes five distinct letters. Frequencies are then computed over
    /// whichever set is being ranked. The sort is stable, so equal scores keep
    /// their pool order.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::solver::GuessScorer;
    /// use wordle_solver::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "trace", "brine", "grape"]);
    /// let pool: Vec<_> = words.iter().collect();
    ///
    /// let ranking = GuessScorer::default().rank(&pool);
    /// assert_eq!(ranking.best().unwrap().text(), "crane");
    /// ```
    #[must_use]
    pub fn rank<'a>(&self, pool: &[&'a Word]) -> Ranking<'a> {
        let unique: Vec<&'a Word> = pool
            .iter()
            .copied()
            .filter(|w| w.has_unique_letters())
            .collect();

        let restricted = unique.len() > self.unique_threshold;
        let ranked = if restricted { unique } else { pool.to_vec() };

        debug!(
            pool = pool.len(),
            ranked = ranked.len(),
            restricted,
            "ranking candidates"
        );

        let table = positional_frequencies(&ranked);

        // Collect keeps the input order, so the stable sort below breaks ties by pool order
        let mut words: Vec<ScoredWord<'a>> = ranked
            .par_iter()
            .map(|&word| ScoredWord {
                word,
                score: score_word(word, &table),
            })
            .collect();
        words.sort_by(|a, b| b.score.cmp(&a.score));

        Ranking { words, restricted }
    }
}

/// Count how often each letter appears at each position across `words`
#[must_use]
pub fn positional_frequencies(words: &[&Word]) -> FrequencyTable {
    let mut table = [[0usize; ALPHABET_SIZE]; WORD_LENGTH];
    for word in words {
        for (position, &letter) in word.chars().iter().enumerate() {
            table[position][usize::from(letter - b'a')] += 1;
        }
    }
    table
}

/// Sum of the word's per-position letter frequencies
#[must_use]
pub fn score_word(word: &Word, table: &FrequencyTable) -> usize {
    word.chars()
        .iter()
        .enumerate()
        .map(|(position, &letter)| table[position][usize::from(letter - b'a')])
        .sum()
}
