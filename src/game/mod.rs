//! The game the solver plays against
//!
//! A game accepts a five-letter word and either refuses it (not in its
//! dictionary) or answers with feedback. Implementations:
//! - [`SimulatedGame`]: knows the answer and computes feedback itself
//! - [`TerminalGame`]: a person relays feedback from a real game

mod simulated;
mod terminal;

pub use simulated::SimulatedGame;
pub use terminal::TerminalGame;

use crate::core::{Feedback, Word};
use crate::error::SolveError;

/// Response to a submitted word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game does not recognize the word
    Rejected,
    /// The word was played and scored
    Accepted(Feedback),
}

/// An opponent that scores guesses
pub trait Game {
    /// Submit a word and wait for the game's response
    ///
    /// # Errors
    /// Returns an error if the game cannot be reached or its response cannot be
    /// understood. A word the game refuses is `Ok(Outcome::Rejected)`, not an error.
    fn submit(&mut self, word: &Word) -> Result<Outcome, SolveError>;
}

impl<G: Game + ?Sized> Game for &mut G {
    fn submit(&mut self, word: &Word) -> Result<Outcome, SolveError> {
        (**self).submit(word)
    }
}
