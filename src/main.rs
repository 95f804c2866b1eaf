//! Wordle Solver - CLI
//!
//! Plays Wordle by constraint pruning and positional letter frequencies,
//! against a known target, a benchmark set, or a real game relayed by hand.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_solver::{
    commands::{SolveConfig, run_benchmark, run_play, select_targets, solve_word},
    core::Word,
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, SolverConfig},
    transcript::{RunLog, Transcript},
    wordlists::{LEXICON, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle solver using constraint pruning and positional letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Lexicon file, one word per line (default: embedded lexicon)
    #[arg(short = 'w', long, global = true)]
    lexicon: Option<PathBuf>,

    /// JSON solver configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Maximum accepted guesses per game
    #[arg(long, global = true)]
    max_attempts: Option<usize>,

    /// Only rank letter-unique words while more than this many remain
    #[arg(long, global = true)]
    unique_threshold: Option<usize>,

    /// Append each finished game to this JSON-lines log
    #[arg(short, long, global = true)]
    log_file: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Relay a real game: the solver suggests, you report the colors (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Reject guesses missing from this word list, like a real game would
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Show pool sizes for each guess
        #[arg(short = 'p', long)]
        pools: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test (default: whole lexicon)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for the random sample
        #[arg(short, long, default_value = "0")]
        seed: u64,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wordle_solver=debug")
    } else {
        EnvFilter::new("wordle_solver=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let lexicon = load_lexicon(cli.lexicon.as_ref())?;
    let config = load_config(&cli)?;
    let solver = Solver::new(&lexicon, config);
    let run_log = cli.log_file.clone().map(RunLog::new);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let transcript = run_play(&solver)?;
            log_transcript(run_log.as_ref(), &transcript)
        }
        Commands::Solve {
            word,
            dictionary,
            pools,
        } => {
            let mut solve_config = SolveConfig::new(word);
            if let Some(path) = dictionary {
                let words = loader::load_from_file(&path)
                    .with_context(|| format!("reading dictionary {}", path.display()))?;
                solve_config = solve_config.with_dictionary(words);
            }
            let result = solve_word(solve_config, &solver)?;
            print_solve_result(&result, pools);
            log_transcript(run_log.as_ref(), &result.transcript)
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&solver, &lexicon, count, seed);
            Ok(())
        }
    }
}

fn load_lexicon(path: Option<&PathBuf>) -> Result<Vec<Word>> {
    let words = match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("reading lexicon {}", path.display()))?,
        None => loader::words_from_slice(LEXICON),
    };
    info!("Lexicon: {} words", words.len());
    Ok(words)
}

/// File values first, then command-line overrides
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => SolverConfig::default(),
    };
    if let Some(max_attempts) = cli.max_attempts {
        config = config.with_max_attempts(max_attempts);
    }
    if let Some(threshold) = cli.unique_threshold {
        config = config.with_unique_threshold(threshold);
    }
    Ok(config)
}

fn log_transcript(run_log: Option<&RunLog>, transcript: &Transcript) -> Result<()> {
    if let Some(log) = run_log {
        log.append(transcript)
            .with_context(|| format!("writing run log {}", log.path().display()))?;
        info!("Transcript appended to {}", log.path().display());
    }
    Ok(())
}

fn run_benchmark_command(solver: &Solver<'_>, lexicon: &[Word], count: Option<usize>, seed: u64) {
    let targets = select_targets(lexicon, count, seed);
    println!("Running benchmark on {} words...", targets.len());

    let result = run_benchmark(solver, &targets, true);
    print_benchmark_result(&result);
}
