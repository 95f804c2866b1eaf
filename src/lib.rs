//! Wordle Solver
//!
//! A Wordle solver that prunes a lexicon with the constraints learned from
//! feedback and picks each guess by positional letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::Word;
//! use wordle_solver::game::SimulatedGame;
//! use wordle_solver::solver::{Solver, SolverConfig};
//! use wordle_solver::wordlists::{LEXICON, loader::words_from_slice};
//!
//! let lexicon = words_from_slice(LEXICON);
//! let solver = Solver::new(&lexicon, SolverConfig::default());
//!
//! let mut game = SimulatedGame::new(Word::new("crane").unwrap());
//! let transcript = solver.run(&mut game).unwrap();
//! for record in &transcript.records {
//!     println!("{} {} ({} words)", record.word, record.feedback, record.pool_size);
//! }
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Game interface and implementations
pub mod game;

// Knowledge, candidate pool, scoring and the solve loop
pub mod solver;

// Guess records and the run log
pub mod transcript;

// Lexicons
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{Result, SolveError};
