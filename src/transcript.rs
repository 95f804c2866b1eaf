//! Game transcripts and the run log
//!
//! A transcript lists every accepted guess with the number of words it was
//! chosen from and the feedback it earned. Finished transcripts can be
//! appended to a JSON-lines log file, one game per line.

use crate::core::Feedback;
use crate::error::SolveError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// One accepted guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    #[serde(rename = "guess")]
    pub word: String,
    /// Number of words the guess was picked from
    #[serde(rename = "options")]
    pub pool_size: usize,
    #[serde(rename = "result")]
    pub feedback: Feedback,
}

/// How a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameResult {
    Solved { attempts: usize },
    Exhausted,
}

/// Full record of a finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub records: Vec<GuessRecord>,
    pub result: GameResult,
}

impl Transcript {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.result, GameResult::Solved { .. })
    }

    /// Number of accepted guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.records.len()
    }

    /// The winning word, if the game was solved
    #[must_use]
    pub fn answer(&self) -> Option<&str> {
        if self.is_solved() {
            self.records.last().map(|r| r.word.as_str())
        } else {
            None
        }
    }
}

/// One line of the run log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Local date the game was played, `yy/mm/dd`
    pub date: String,
    #[serde(rename = "guess record")]
    pub guess_record: Vec<GuessRecord>,
}

/// Append-only JSON-lines log of finished games
#[derive(Debug, Clone)]
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a transcript dated today
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or written.
    pub fn append(&self, transcript: &Transcript) -> Result<(), SolveError> {
        self.append_dated(transcript, Local::now().date_naive())
    }

    /// Append a transcript with an explicit date
    ///
    /// # Errors
    /// Returns an error if the log file cannot be opened or written.
    pub fn append_dated(&self, transcript: &Transcript, date: NaiveDate) -> Result<(), SolveError> {
        let entry = LogEntry {
            date: date.format("%y/%m/%d").to_string(),
            guess_record: transcript.records.clone(),
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let line = serde_json::to_string(&entry)?;
        writeln!(file, "{line}")?;

        tracing::debug!(path = %self.path.display(), guesses = entry.guess_record.len(), "transcript logged");
        Ok(())
    }

    /// Read every entry back, skipping blank lines
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or a line is not a valid entry.
    pub fn entries(&self) -> Result<Vec<LogEntry>, SolveError> {
        let content = fs::read_to_string(&self.path)?;
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(SolveError::from))
            .collect()
    }
}
