//! Game with a known answer, for testing and benchmarking

use super::{Game, Outcome};
use crate::core::{Feedback, Word};
use crate::error::SolveError;
use rustc_hash::FxHashSet;

/// Scores guesses against a fixed answer
///
/// With a dictionary set, words outside it are rejected the way a real game
/// refuses words not in its word list.
#[derive(Debug, Clone)]
pub struct SimulatedGame {
    answer: Word,
    dictionary: Option<FxHashSet<Word>>,
    submissions: usize,
}

impl SimulatedGame {
    /// Create a game that accepts any well-formed word
    #[must_use]
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            dictionary: None,
            submissions: 0,
        }
    }

    /// Only accept words from `dictionary`
    #[must_use]
    pub fn with_dictionary<'w>(mut self, dictionary: impl IntoIterator<Item = &'w Word>) -> Self {
        self.dictionary = Some(dictionary.into_iter().cloned().collect());
        self
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// Number of words submitted, accepted or not
    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }
}

impl Game for SimulatedGame {
    fn submit(&mut self, word: &Word) -> Result<Outcome, SolveError> {
        self.submissions += 1;

        if let Some(dictionary) = &self.dictionary
            && !dictionary.contains(word)
        {
            return Ok(Outcome::Rejected);
        }

        Ok(Outcome::Accepted(Feedback::calculate(word, &self.answer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn scores_against_answer() {
        let mut game = SimulatedGame::new(Word::new("trace").unwrap());
        let outcome = game.submit(&Word::new("crane").unwrap()).unwrap();

        assert_eq!(
            outcome,
            Outcome::Accepted(Feedback::parse("YGGBG").unwrap())
        );
        assert_eq!(game.submissions(), 1);
    }

    #[test]
    fn dictionary_rejects_unknown_words() {
        let dictionary = words_from_slice(&["crane", "trace"]);
        let mut game =
            SimulatedGame::new(Word::new("trace").unwrap()).with_dictionary(&dictionary);

        assert_eq!(
            game.submit(&Word::new("zzzzz").unwrap()).unwrap(),
            Outcome::Rejected
        );
        assert!(matches!(
            game.submit(&Word::new("trace").unwrap()).unwrap(),
            Outcome::Accepted(fb) if fb.is_solved()
        ));
        assert_eq!(game.submissions(), 2);
        assert_eq!(game.answer().text(), "trace");
    }
}
