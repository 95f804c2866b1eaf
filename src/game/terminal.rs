//! Game relayed by a person at the terminal
//!
//! The solver's word is shown, the person plays it in the real game and
//! types back what the game said.

use super::{Game, Outcome};
use crate::core::{Feedback, Word};
use crate::error::SolveError;
use std::io::{self, BufRead, Stdout, StdinLock, Write};

/// Reads feedback for each guess from a line-oriented input
///
/// Accepted replies:
/// - feedback such as `BYGBB`, `-yg--` or `⬜🟨🟩⬜⬜`
/// - `win` for all green
/// - `x` when the game refused the word
/// - `q` to give up
///
/// Unparseable replies are reported and asked for again.
pub struct TerminalGame<R, W> {
    input: R,
    output: W,
}

impl TerminalGame<StdinLock<'static>, Stdout> {
    /// Relay through standard input and output
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalGame<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_reply(&mut self) -> Result<Option<String>, SolveError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> Game for TerminalGame<R, W> {
    fn submit(&mut self, word: &Word) -> Result<Outcome, SolveError> {
        loop {
            write!(
                self.output,
                "Play {} and enter the feedback (B/Y/G, 'x' if not in word list, 'q' to quit): ",
                word.text().to_uppercase()
            )?;
            self.output.flush()?;

            let Some(reply) = self.read_reply()? else {
                return Err(SolveError::Aborted);
            };

            match reply.to_lowercase().as_str() {
                "q" | "quit" | "exit" => return Err(SolveError::Aborted),
                "x" | "rejected" | "invalid" => return Ok(Outcome::Rejected),
                "win" | "solved" | "correct" => return Ok(Outcome::Accepted(Feedback::SOLVED)),
                _ => match Feedback::parse(&reply) {
                    Ok(feedback) => return Ok(Outcome::Accepted(feedback)),
                    Err(e) => writeln!(self.output, "❌ {e}")?,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submit_with(input: &str) -> (Result<Outcome, SolveError>, String) {
        let mut output = Vec::new();
        let mut game = TerminalGame::new(input.as_bytes(), &mut output);
        let result = game.submit(&Word::new("crane").unwrap());
        drop(game);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn parses_feedback_line() {
        let (result, output) = submit_with("bggbg\n");
        assert_eq!(
            result.unwrap(),
            Outcome::Accepted(Feedback::parse("BGGBG").unwrap())
        );
        assert!(output.contains("CRANE"));
    }

    #[test]
    fn x_means_rejected() {
        let (result, _) = submit_with("x\n");
        assert_eq!(result.unwrap(), Outcome::Rejected);
    }

    #[test]
    fn win_shortcut() {
        let (result, _) = submit_with("win\n");
        assert_eq!(result.unwrap(), Outcome::Accepted(Feedback::SOLVED));
    }

    #[test]
    fn reprompts_after_typo() {
        let (result, output) = submit_with("bggb\nBGGBG\n");
        assert_eq!(
            result.unwrap(),
            Outcome::Accepted(Feedback::parse("BGGBG").unwrap())
        );
        assert!(output.contains("Malformed feedback"));
        assert_eq!(output.matches("Play CRANE").count(), 2);
    }

    #[test]
    fn quit_and_eof_abort() {
        assert!(matches!(submit_with("q\n").0, Err(SolveError::Aborted)));
        assert!(matches!(submit_with("").0, Err(SolveError::Aborted)));
    }
}
