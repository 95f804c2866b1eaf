//! Solver configuration

use super::scorer::DEFAULT_UNIQUE_THRESHOLD;
use crate::error::SolveError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of guesses allowed per game
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Tunable limits for one game
///
/// Loaded from JSON; missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Accepted guesses before the game is lost
    pub max_attempts: usize,
    /// Letter-unique word count above which duplicate-letter words are not ranked
    pub unique_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            unique_threshold: DEFAULT_UNIQUE_THRESHOLD,
        }
    }
}

impl SolverConfig {
    /// Load a configuration file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid JSON.
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_solver::solver::SolverConfig;
    ///
    /// let config = SolverConfig::from_file("solver.json").unwrap();
    /// println!("{} attempts", config.max_attempts);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SolveError> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_unique_threshold(mut self, unique_threshold: usize) -> Self {
        self.unique_threshold = unique_threshold;
        self
    }
}
