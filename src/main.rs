//! Hangman Solver - CLI
//!
//! Letter selector for Hangman words and phrases, driven by candidate
//! partitioning, language priors and affix heuristics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{
        DEFAULT_MAX_GUESSES, SolveConfig, TuneConfig, run_benchmark, run_serve, run_tune,
        solve_phrase,
    },
    core::{GuessedSet, Pattern},
    output::{
        formatters::progress_bar, print_benchmark_result, print_decision, print_solve_result,
        print_tune_result,
    },
    solver::{ScoringWeights, Solver, SolverContext, StrategyType},
    wordlists::loader::{build_lexicon, load_domain_entries, load_phrases},
};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hangman_solver",
    about = "Hangman letter selector using candidate partitioning and language priors",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// General dictionary file, one word per line (default: embedded common words)
    #[arg(short = 'd', long, global = true)]
    dict: Option<PathBuf>,

    /// Domain word list, one word or phrase per line (default: embedded aviation list)
    #[arg(long, global = true)]
    domain: Option<PathBuf>,

    /// Blended weights: eig,prior,positional,left,right,affix (must sum to 1)
    #[arg(short, long, global = true)]
    weights: Option<ScoringWeights>,

    /// Strategy: blended (default) or static
    #[arg(short, long, global = true, default_value = "blended")]
    strategy: String,

    /// Wrong guesses allowed per round
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer JSON game states read from stdin, one per line (default)
    Serve {
        /// Play each request to completion against its hiddenWord
        #[arg(long)]
        auto: bool,
    },

    /// Suggest the next letter for a pattern such as "c__ ___e"
    Guess {
        /// Current pattern, '_' for blanks
        pattern: String,

        /// Letters already tried, e.g. "aeiou"
        #[arg(short, long, default_value = "")]
        guessed: String,
    },

    /// Play a full round against a known phrase
    Solve {
        /// The hidden phrase
        phrase: String,

        /// Show guesses remaining after each turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every phrase of a test set and summarize
    Benchmark {
        /// Limit number of phrases to play
        #[arg(short, long)]
        limit: Option<usize>,

        /// Phrase file, one per line (default: embedded airline set)
        #[arg(short, long)]
        phrases: Option<PathBuf>,
    },

    /// Grid-search blended weights on random folds of the domain list
    Tune {
        #[arg(long, default_value_t = 3)]
        folds: usize,

        #[arg(long, default_value_t = 30)]
        fold_size: usize,

        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Number of top combinations to print
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let lexicon = build_lexicon(cli.dict.as_deref(), cli.domain.as_deref())?;
    let context = SolverContext::new(lexicon);
    let solver = Solver::with_weights(&context, cli.weights.unwrap_or_default());
    let strategy = StrategyType::from_name(&cli.strategy, solver);
    log::info!("Using {} strategy", strategy.name());

    match cli.command.unwrap_or(Commands::Serve { auto: false }) {
        Commands::Serve { auto } => {
            let stdin = io::stdin();
            run_serve(&strategy, stdin.lock(), io::stdout().lock(), auto)
        }
        Commands::Guess { pattern, guessed } => run_guess_command(&solver, &pattern, &guessed),
        Commands::Solve { phrase, verbose } => {
            let mut config = SolveConfig::new(phrase.trim().to_lowercase());
            config.max_guesses = cli.max_guesses;
            let result = solve_phrase(&config, &strategy)
                .with_context(|| format!("cannot play {phrase:?}"))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { limit, phrases } => {
            let mut phrases = load_phrases(phrases.as_deref())?;
            if let Some(limit) = limit {
                phrases.truncate(limit);
            }
            println!("🎯 Playing {} phrases with {}...", phrases.len(), strategy.name());
            let pb = progress_bar(phrases.len());
            let result = run_benchmark(&strategy, &phrases, cli.max_guesses, &pb);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Tune {
            folds,
            fold_size,
            seed,
            top,
        } => {
            let words = load_domain_entries(cli.domain.as_deref())?;
            let config = TuneConfig {
                folds,
                fold_size,
                seed,
                max_guesses: cli.max_guesses,
                ..TuneConfig::default()
            };
            let pb = progress_bar(config.grid.combinations().len());
            let result = run_tune(&context, &words, &config, &pb);
            print_tune_result(&result, top);
            Ok(())
        }
    }
}

fn run_guess_command(solver: &Solver<'_>, pattern: &str, guessed: &str) -> Result<()> {
    let pattern: Pattern = pattern
        .trim()
        .to_lowercase()
        .parse()
        .with_context(|| format!("invalid pattern {pattern:?}"))?;
    let guessed = GuessedSet::from_entries(guessed.chars().map(String::from));

    let decision = solver.decide(&pattern, guessed);
    print_decision(&pattern, guessed, &decision);
    Ok(())
}
