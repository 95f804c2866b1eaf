//! Knowledge accumulated from feedback during one game
//!
//! Four kinds of fact are kept:
//! - letters pinned to a position (green)
//! - letters known not to be at a position (yellow, or a surplus gray copy)
//! - letters known to be somewhere in the answer (yellow)
//! - letters known to be absent from the answer entirely (gray)

use crate::core::{Feedback, Judgment, WORD_LENGTH, Word};
use crate::error::SolveError;
use rustc_hash::FxHashSet;
use tracing::debug;

/// Everything learned from feedback so far
///
/// Created empty at the start of a game and updated with [`Knowledge::learn`]
/// after every accepted guess. Letters are lowercase ASCII bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Knowledge {
    known: [Option<u8>; WORD_LENGTH],
    excluded: FxHashSet<(usize, u8)>,
    present: FxHashSet<u8>,
    eliminated: FxHashSet<u8>,
}

impl Knowledge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record what a guess and its feedback reveal
    ///
    /// A gray letter only eliminates the letter when no other copy of it in the
    /// same guess scored yellow or green, and it is not already known to be in
    /// the answer. Otherwise the gray marks a surplus copy and only rules out
    /// that one position.
    ///
    /// Applying the same guess and feedback twice leaves the store unchanged
    /// after the first call.
    ///
    /// # Errors
    /// Returns `SolveError::ContradictoryFeedback` if a green lands on a
    /// position already pinned to a different letter. The store is not
    /// modified in that case.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Word};
    /// use wordle_solver::solver::Knowledge;
    ///
    /// let mut knowledge = Knowledge::new();
    /// let guess = Word::new("erase").unwrap();
    /// knowledge.learn(&guess, &Feedback::parse("BYYGG").unwrap()).unwrap();
    ///
    /// // The leading E is a surplus copy, not an elimination
    /// assert!(!knowledge.is_eliminated(b'e'));
    /// assert!(knowledge.is_excluded_at(0, b'e'));
    /// assert_eq!(knowledge.known_at(4), Some(b'e'));
    /// ```
    pub fn learn(&mut self, word: &Word, feedback: &Feedback) -> Result<(), SolveError> {
        let judgments = feedback.judgments();

        for (position, (&letter, &judgment)) in word.chars().iter().zip(judgments).enumerate() {
            if judgment == Judgment::Correct
                && let Some(known) = self.known[position]
                && known != letter
            {
                return Err(SolveError::ContradictoryFeedback {
                    position,
                    known: char::from(known),
                    observed: char::from(letter),
                });
            }
        }

        // Letters scored yellow or green anywhere in this guess
        let confirmed: FxHashSet<u8> = word
            .chars()
            .iter()
            .zip(judgments)
            .filter(|&(_, &judgment)| judgment != Judgment::Absent)
            .map(|(&letter, _)| letter)
            .collect();

        for (position, (&letter, &judgment)) in word.chars().iter().zip(judgments).enumerate() {
            match judgment {
                Judgment::Correct => {
                    self.known[position] = Some(letter);
                }
                Judgment::Present => {
                    self.present.insert(letter);
                    self.excluded.insert((position, letter));
                }
                Judgment::Absent => {
                    if confirmed.contains(&letter) || self.is_confirmed(letter) {
                        self.excluded.insert((position, letter));
                    } else {
                        self.eliminated.insert(letter);
                    }
                }
            }
        }

        debug!(
            guess = word.text(),
            feedback = %feedback,
            known = self.known_count(),
            present = self.present.len(),
            excluded = self.excluded.len(),
            eliminated = self.eliminated.len(),
            "knowledge updated"
        );

        Ok(())
    }

    /// Letter pinned to `position`, if any
    ///
    /// Positions past the end of the word have nothing pinned.
    #[inline]
    #[must_use]
    pub fn known_at(&self, position: usize) -> Option<u8> {
        self.known.get(position).copied().flatten()
    }

    /// Iterate over `(position, letter)` pairs confirmed green
    pub fn known_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.known
            .iter()
            .enumerate()
            .filter_map(|(position, letter)| letter.map(|l| (position, l)))
    }

    /// Number of pinned positions
    #[must_use]
    pub fn known_count(&self) -> usize {
        self.known.iter().flatten().count()
    }

    #[must_use]
    pub fn is_excluded_at(&self, position: usize, letter: u8) -> bool {
        self.excluded.contains(&(position, letter))
    }

    /// Iterate over `(position, letter)` pairs ruled out
    pub fn excluded_positions(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        self.excluded.iter().copied()
    }

    #[must_use]
    pub fn is_present(&self, letter: u8) -> bool {
        self.present.contains(&letter)
    }

    /// Letters known to be in the answer but not tied to a position by yellow feedback
    pub fn present_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.present.iter().copied()
    }

    #[must_use]
    pub fn is_eliminated(&self, letter: u8) -> bool {
        self.eliminated.contains(&letter)
    }

    pub fn eliminated_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.eliminated.iter().copied()
    }

    /// True until the first feedback is learned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.known_count() == 0
            && self.excluded.is_empty()
            && self.present.is_empty()
            && self.eliminated.is_empty()
    }

    /// Letter is known to be somewhere in the answer
    fn is_confirmed(&self, letter: u8) -> bool {
        self.present.contains(&letter) || self.known.contains(&Some(letter))
    }
}
