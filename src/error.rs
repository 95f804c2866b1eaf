//! Error types for the solver

use crate::core::WordError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    /// Every lexicon word has been ruled out while attempts remain.
    #[error("No candidates remain on attempt {attempt}: feedback is contradictory or the answer is missing from the lexicon")]
    EmptyCandidatePool { attempt: usize },

    #[error("Malformed feedback: {0}")]
    MalformedFeedback(String),

    #[error(
        "Contradictory feedback: position {} is already '{known}', feedback says '{observed}'",
        .position + 1
    )]
    ContradictoryFeedback {
        position: usize,
        known: char,
        observed: char,
    },

    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("Invalid session state: {0}")]
    InvalidState(String),

    #[error("Game aborted by the player")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolveError>;
