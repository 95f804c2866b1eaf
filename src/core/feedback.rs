//! Per-letter judgments and whole-guess feedback
//!
//! Feedback is written as one symbol per letter:
//! - `B` = absent (letter not in the answer, or no further copies)
//! - `Y` = present (letter in the answer, elsewhere)
//! - `G` = correct (letter in this position)

use super::word::letter_index;
use super::{WORD_LENGTH, Word};
use crate::error::SolveError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Judgment for a single letter at a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Judgment {
    Absent,
    Present,
    Correct,
}

impl Judgment {
    /// Transcript symbol for this judgment
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'B',
            Self::Present => 'Y',
            Self::Correct => 'G',
        }
    }

    /// Emoji tile for this judgment
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts `B`/`-`/`_`/⬜, `Y`/🟨 and `G`/🟩, case-insensitive.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'B' | 'b' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'G' | 'g' | '🟩' => Some(Self::Correct),
            _ => None,
        }
    }
}

/// Parses the tile evaluation names a web game reports: `absent`, `present`, `correct`
impl FromStr for Judgment {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absent" => Ok(Self::Absent),
            "present" => Ok(Self::Present),
            "correct" => Ok(Self::Correct),
            other => Err(SolveError::MalformedFeedback(format!(
                "unknown judgment '{other}'"
            ))),
        }
    }
}

/// Ordered feedback for a whole guess, one judgment per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Judgment; WORD_LENGTH]);

impl Feedback {
    /// Every letter correct
    pub const SOLVED: Self = Self([Judgment::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(judgments: [Judgment; WORD_LENGTH]) -> Self {
        Self(judgments)
    }

    /// Build feedback from a judgment sequence of unknown length
    ///
    /// # Errors
    /// Returns `SolveError::MalformedFeedback` unless exactly five judgments are given.
    pub fn from_judgments(judgments: &[Judgment]) -> Result<Self, SolveError> {
        let judgments: [Judgment; WORD_LENGTH] = judgments.try_into().map_err(|_| {
            SolveError::MalformedFeedback(format!(
                "expected {WORD_LENGTH} judgments, got {}",
                judgments.len()
            ))
        })?;
        Ok(Self(judgments))
    }

    /// Parse feedback such as `"BGGBG"`, `"-YG--"` or `"⬜🟨🟩⬜⬜"`
    ///
    /// # Errors
    /// Returns `SolveError::MalformedFeedback` on a wrong length or an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Judgment};
    ///
    /// let fb = Feedback::parse("BGGBG").unwrap();
    /// assert_eq!(fb.judgments()[1], Judgment::Correct);
    /// assert_eq!(fb, Feedback::parse("⬜🟩🟩⬜🟩").unwrap());
    /// assert!(Feedback::parse("BGGB").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, SolveError> {
        let judgments = s
            .trim()
            .chars()
            .map(|ch| {
                Judgment::from_symbol(ch).ok_or_else(|| {
                    SolveError::MalformedFeedback(format!("unknown judgment symbol '{ch}' in '{s}'"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_judgments(&judgments)
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Follows the official rules for repeated letters: greens are assigned
    /// first, then yellows are handed out left to right while unmatched copies
    /// of the letter remain in the answer. Excess copies are absent.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{Feedback, Word};
    ///
    /// let guess = Word::new("erase").unwrap();
    /// let answer = Word::new("raise").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_string(), "BYYGG");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [Judgment::Absent; WORD_LENGTH];
        let mut available = answer.letter_counts();

        // Allow: Index needed to compare guess[i] with answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if guess.char_at(i) == answer.char_at(i) {
                result[i] = Judgment::Correct;
                available[letter_index(guess.char_at(i))] -= 1;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LENGTH {
            if result[i] == Judgment::Absent {
                let slot = &mut available[letter_index(guess.char_at(i))];
                if *slot > 0 {
                    result[i] = Judgment::Present;
                    *slot -= 1;
                }
            }
        }

        Self(result)
    }

    #[inline]
    #[must_use]
    pub const fn judgments(&self) -> &[Judgment; WORD_LENGTH] {
        &self.0
    }

    /// Check if every judgment is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&j| j == Judgment::Correct)
    }

    /// Convert to an emoji string like "⬜🟨🟩⬜🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|j| j.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for judgment in &self.0 {
            write!(f, "{}", judgment.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Feedback {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Feedback {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Feedback {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
