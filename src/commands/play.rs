//! Interactive relay mode
//!
//! The solver suggests each word; the player enters it in the real game and
//! types back the colors.

use crate::error::SolveError;
use crate::game::{Game, TerminalGame};
use crate::output::print_transcript;
use crate::solver::Solver;
use crate::transcript::Transcript;
use colored::Colorize;

/// Run one relayed game on standard input and output
///
/// # Errors
///
/// Returns an error if the player quits, standard input closes, or the
/// candidate pool runs dry (usually a typo in earlier feedback).
pub fn run_play(solver: &Solver<'_>) -> Result<Transcript, SolveError> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest a word; play it and tell me the colors:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use B/-/⬜ for gray (not in word)");
    println!("  - Type 'x' if the game says \"Not in word list\"");
    println!("  - Type 'win' if you got it right, 'q' to quit\n");
    println!(
        "{} words to choose from, {} attempts.\n",
        solver.lexicon().len().to_string().bright_cyan(),
        solver.config().max_attempts
    );

    play_game(solver, &mut TerminalGame::stdio())
}

/// Play a game and print its transcript
///
/// # Errors
///
/// Returns whatever the solver or game reports.
pub fn play_game<G: Game>(solver: &Solver<'_>, game: &mut G) -> Result<Transcript, SolveError> {
    let transcript = solver.run(game)?;
    print_transcript(&transcript, None, true);
    Ok(transcript)
}
