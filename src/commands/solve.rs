//! Word solving command
//!
//! Plays a game against a known target and returns the transcript.

use crate::core::Word;
use crate::error::SolveError;
use crate::game::SimulatedGame;
use crate::solver::Solver;
use crate::transcript::Transcript;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    /// Reject guesses that are not in this word list
    pub dictionary: Option<Vec<Word>>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            dictionary: None,
        }
    }

    #[must_use]
    pub fn with_dictionary(mut self, dictionary: Vec<Word>) -> Self {
        self.dictionary = Some(dictionary);
        self
    }
}

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: Word,
    pub transcript: Transcript,
    /// Guesses the game refused
    pub rejected: usize,
}

/// Solve a specific word using the given solver
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The candidate pool runs dry before the game ends
pub fn solve_word(config: SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, SolveError> {
    let target = Word::new(&config.target)?;

    let mut game = SimulatedGame::new(target.clone());
    if let Some(dictionary) = &config.dictionary {
        game = game.with_dictionary(dictionary);
    }

    let transcript = solver.run(&mut game)?;
    let rejected = game.submissions() - transcript.attempts();

    Ok(SolveResult {
        target,
        transcript,
        rejected,
    })
}
