//! Constraint-pruning Wordle solver
//!
//! Knowledge from feedback narrows a candidate pool drawn from the lexicon,
//! and a positional letter-frequency score picks the next guess from it.

mod config;
mod engine;
mod knowledge;
mod pool;
mod scorer;
mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, SolverConfig};
pub use engine::Solver;
pub use knowledge::Knowledge;
pub use pool::{CandidatePool, filter, is_consistent, remove};
pub use scorer::{
    DEFAULT_UNIQUE_THRESHOLD, FrequencyTable, GuessScorer, Ranking, ScoredWord,
    positional_frequencies, score_word,
};
pub use session::{Session, SessionState};
