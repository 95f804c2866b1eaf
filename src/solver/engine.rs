//! Main Wordle solver interface

use super::{Session, SolverConfig};
use crate::core::Word;
use crate::error::SolveError;
use crate::game::Game;
use crate::transcript::Transcript;

/// Main Wordle solver
///
/// Holds the lexicon and configuration; each call to [`Solver::run`] plays one
/// independent game.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'a> {
    lexicon: &'a [Word],
    config: SolverConfig,
}

impl<'a> Solver<'a> {
    /// Create a new solver over a lexicon
    #[must_use]
    pub const fn new(lexicon: &'a [Word], config: SolverConfig) -> Self {
        Self { lexicon, config }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a [Word] {
        self.lexicon
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Start a fresh game session
    #[must_use]
    pub fn session(&self) -> Session<'a> {
        Session::new(self.lexicon, self.config)
    }

    /// Play one game to the end
    ///
    /// Guesses are submitted one at a time; each waits for the game's answer
    /// before the next is chosen. Rejected words are dropped from the pool and
    /// replaced without using an attempt.
    ///
    /// # Errors
    /// - `SolveError::EmptyCandidatePool` if every word is ruled out
    /// - any error the game reports while submitting
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::Word;
    /// use wordle_solver::game::SimulatedGame;
    /// use wordle_solver::solver::{Solver, SolverConfig};
    /// use wordle_solver::wordlists::loader::words_from_slice;
    ///
    /// let lexicon = words_from_slice(&["crane", "slate", "trace", "brine", "grape"]);
    /// let solver = Solver::new(&lexicon, SolverConfig::default());
    ///
    /// let mut game = SimulatedGame::new(Word::new("trace").unwrap());
    /// let transcript = solver.run(&mut game).unwrap();
    /// assert_eq!(transcript.answer(), Some("trace"));
    /// ```
    pub fn run<G: Game>(&self, game: &mut G) -> Result<Transcript, SolveError> {
        let mut session = self.session();

        while !session.state().is_terminal() {
            let guess = session.propose()?;
            let outcome = game.submit(guess)?;
            session.observe(outcome)?;
        }

        session.into_transcript()
    }
}
