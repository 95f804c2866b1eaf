//! Display functions for command results

use super::formatters::{colored_tiles, create_progress_bar};
use crate::commands::{BenchmarkResult, SolveResult};
use crate::transcript::{GameResult, Transcript};
use colored::Colorize;

/// Print a finished game
pub fn print_transcript(transcript: &Transcript, target: Option<&str>, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    if let Some(target) = target {
        println!("Solving: {}", target.to_uppercase().bright_yellow().bold());
        println!("{}", "─".repeat(60).cyan());
    }

    for (i, record) in transcript.records.iter().enumerate() {
        print!(
            "\nGuess {}: {} {}",
            i + 1,
            colored_tiles(&record.word, &record.feedback),
            record.feedback.to_emoji()
        );
        if verbose {
            print!("  ({} words)", record.pool_size);
        }
        println!();
    }

    println!();
    match transcript.result {
        GameResult::Solved { attempts } => println!(
            "{}",
            format!(
                "✅ Solved in {attempts} {}!",
                if attempts == 1 { "guess" } else { "guesses" }
            )
            .green()
            .bold()
        ),
        GameResult::Exhausted => println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", transcript.attempts())
                .red()
                .bold()
        ),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    print_transcript(&result.transcript, Some(result.target.text()), verbose);
    if result.rejected > 0 {
        println!(
            "{}",
            format!("   ({} guesses not in the game's word list)", result.rejected).bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved,
        result.success_rate() * 100.0
    );
    println!(
        "   Failed:           {}",
        format!("{}", result.failed).yellow()
    );
    if result.errors > 0 {
        println!("   Errors:           {}", format!("{}", result.errors).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.unsolved.is_empty() {
        let shown: Vec<String> = result
            .unsolved
            .iter()
            .take(10)
            .map(|w| w.to_uppercase())
            .collect();
        println!(
            "\n⚠️  {} {}",
            "Unsolved:".yellow().bold(),
            shown.join(", ")
        );
    }
}
