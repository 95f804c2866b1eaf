//! Benchmark command
//!
//! Tests solver performance across many target words.

use crate::core::Word;
use crate::game::SimulatedGame;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Games that used every attempt
    pub failed: usize,
    /// Games that stopped on an error (empty pool)
    pub errors: usize,
    /// Guesses summed over solved games
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    /// Unsolved target words
    pub unsolved: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        self.solved as f64 / self.total_words as f64
    }
}

/// Pick benchmark targets
///
/// All lexicon words when `count` is `None` or covers the lexicon, otherwise a
/// reproducible random sample.
#[must_use]
pub fn select_targets(lexicon: &[Word], count: Option<usize>, seed: u64) -> Vec<&Word> {
    match count {
        Some(n) if n < lexicon.len() => {
            let mut rng = StdRng::seed_from_u64(seed);
            lexicon.choose_multiple(&mut rng, n).collect()
        }
        _ => lexicon.iter().collect(),
    }
}

/// Run the solver against each target in parallel
pub fn run_benchmark(solver: &Solver<'_>, targets: &[&Word], show_progress: bool) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<(&Word, Option<usize>, bool)> = targets
        .par_iter()
        .map(|&target| {
            let mut game = SimulatedGame::new(target.clone());
            let outcome = match solver.run(&mut game) {
                Ok(transcript) if transcript.is_solved() => (target, Some(transcript.attempts()), false),
                Ok(_) => (target, None, false),
                Err(e) => {
                    warn!(word = target.text(), error = %e, "benchmark game failed");
                    (target, None, true)
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut result = BenchmarkResult {
        total_words: targets.len(),
        solved: 0,
        failed: 0,
        errors: 0,
        total_guesses: 0,
        average_guesses: 0.0,
        min_guesses: 0,
        max_guesses: 0,
        distribution: BTreeMap::new(),
        unsolved: Vec::new(),
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    };

    let mut min_guesses = usize::MAX;
    for (target, guesses, errored) in outcomes {
        match guesses {
            Some(n) => {
                result.solved += 1;
                result.total_guesses += n;
                min_guesses = min_guesses.min(n);
                result.max_guesses = result.max_guesses.max(n);
                *result.distribution.entry(n).or_insert(0) += 1;
            }
            None => {
                if errored {
                    result.errors += 1;
                } else {
                    result.failed += 1;
                }
                result.unsolved.push(target.text().to_string());
            }
        }
    }

    if result.solved > 0 {
        result.min_guesses = min_guesses;
        result.average_guesses = result.total_guesses as f64 / result.solved as f64;
    }

    result
}
