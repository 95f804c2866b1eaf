//! One game's guess / feedback cycle as an explicit state machine
//!
//! ```text
//! Guessing --propose--> AwaitingFeedback --observe--> Guessing | Solved | Exhausted
//! ```
//!
//! A rejected word sends the session back to `Guessing` without using an
//! attempt or touching the knowledge.

use super::{CandidatePool, GuessScorer, Knowledge, SolverConfig};
use crate::core::Word;
use crate::error::SolveError;
use crate::game::Outcome;
use crate::transcript::{GameResult, GuessRecord, Transcript};
use tracing::{debug, warn};

/// Where a session is in its cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState<'a> {
    /// Ready to pick the next guess
    Guessing,
    /// A guess has been handed out and its outcome is pending
    AwaitingFeedback(&'a Word),
    /// The last guess was all green
    Solved,
    /// The attempt limit was used up without a solve
    Exhausted,
}

impl SessionState<'_> {
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

/// State for a single game
///
/// Owns the knowledge and candidate pool for the game's lifetime. Drive it by
/// alternating [`Session::propose`] and [`Session::observe`] until the state
/// is terminal, then collect the transcript.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    config: SolverConfig,
    scorer: GuessScorer,
    knowledge: Knowledge,
    pool: CandidatePool<'a>,
    attempt: usize,
    records: Vec<GuessRecord>,
    state: SessionState<'a>,
    ranked_len: usize,
}

impl<'a> Session<'a> {
    /// Start a game over the full lexicon with empty knowledge
    ///
    /// A limit of zero attempts yields a session that is already `Exhausted`.
    #[must_use]
    pub fn new(lexicon: &'a [Word], config: SolverConfig) -> Self {
        let state = if config.max_attempts == 0 {
            SessionState::Exhausted
        } else {
            SessionState::Guessing
        };
        Self {
            config,
            scorer: GuessScorer::new(config.unique_threshold),
            knowledge: Knowledge::new(),
            pool: CandidatePool::new(lexicon),
            attempt: 1,
            records: Vec::new(),
            state,
            ranked_len: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState<'a> {
        self.state
    }

    /// Attempt number of the next accepted guess, starting at 1
    #[must_use]
    pub const fn attempt(&self) -> usize {
        self.attempt
    }

    #[must_use]
    pub const fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool<'a> {
        &self.pool
    }

    /// Accepted guesses so far
    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Rank the pool and hand out its top word
    ///
    /// # Errors
    /// - `SolveError::EmptyCandidatePool` if nothing is left to guess
    /// - `SolveError::InvalidState` unless the session is `Guessing` with
    ///   attempts to spare
    pub fn propose(&mut self) -> Result<&'a Word, SolveError> {
        if self.state != SessionState::Guessing {
            return Err(SolveError::InvalidState(format!(
                "cannot propose a guess while {:?}",
                self.state
            )));
        }
        if self.attempt > self.config.max_attempts {
            self.state = SessionState::Exhausted;
            return Err(SolveError::InvalidState(format!(
                "attempt {} exceeds the limit of {}",
                self.attempt, self.config.max_attempts
            )));
        }

        let ranking = self.scorer.rank(self.pool.words());
        let guess = ranking
            .best()
            .ok_or(SolveError::EmptyCandidatePool {
                attempt: self.attempt,
            })?;

        self.ranked_len = ranking.len();
        self.state = SessionState::AwaitingFeedback(guess);

        debug!(
            "Guess {}: {} ({} words)",
            self.attempt,
            guess.text().to_uppercase(),
            self.ranked_len
        );
        Ok(guess)
    }

    /// Apply the game's response to the outstanding guess
    ///
    /// Returns the new state.
    ///
    /// # Errors
    /// - `SolveError::InvalidState` if no guess is outstanding
    /// - `SolveError::ContradictoryFeedback` if the feedback conflicts with
    ///   what is already known; the guess stays outstanding
    pub fn observe(&mut self, outcome: Outcome) -> Result<SessionState<'a>, SolveError> {
        let SessionState::AwaitingFeedback(guess) = self.state else {
            return Err(SolveError::InvalidState(format!(
                "no guess awaiting feedback while {:?}",
                self.state
            )));
        };

        let feedback = match outcome {
            Outcome::Rejected => {
                warn!(word = guess.text(), "guess rejected by the game");
                self.pool.reject(guess);
                self.state = SessionState::Guessing;
                return Ok(self.state);
            }
            Outcome::Accepted(feedback) => feedback,
        };

        self.records.push(GuessRecord {
            word: guess.text().to_string(),
            pool_size: self.ranked_len,
            feedback,
        });

        if feedback.is_solved() {
            debug!("Solved: {} in {}", guess.text().to_uppercase(), self.attempt);
            self.state = SessionState::Solved;
            return Ok(self.state);
        }

        if let Err(e) = self.knowledge.learn(guess, &feedback) {
            // Still awaiting usable feedback for the same guess
            self.records.pop();
            return Err(e);
        }
        self.pool.refine(&self.knowledge);
        self.attempt += 1;

        self.state = if self.attempt > self.config.max_attempts {
            debug!(
                "Out of attempts after {} guesses, {} candidates left",
                self.records.len(),
                self.pool.len()
            );
            SessionState::Exhausted
        } else {
            SessionState::Guessing
        };
        Ok(self.state)
    }

    /// Finish a terminated game
    ///
    /// # Errors
    /// Returns `SolveError::InvalidState` if the game is still in progress.
    pub fn into_transcript(self) -> Result<Transcript, SolveError> {
        let result = match self.state {
            SessionState::Solved => GameResult::Solved {
                attempts: self.records.len(),
            },
            SessionState::Exhausted => GameResult::Exhausted,
            state => {
                return Err(SolveError::InvalidState(format!(
                    "game still in progress ({state:?})"
                )));
            }
        };

        Ok(Transcript {
            records: self.records,
            result,
        })
    }
}
