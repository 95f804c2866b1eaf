//! Core domain types for Wordle
//!
//! Words, per-letter judgments and feedback. Nothing in here knows about
//! candidate pools or guess selection.

mod feedback;
mod word;

pub use feedback::{Feedback, Judgment};
pub use word::{Word, WordError};

/// Number of letters in every Wordle word
pub const WORD_LENGTH: usize = 5;

/// Number of letters in the alphabet words are drawn from
pub const ALPHABET_SIZE: usize = 26;
