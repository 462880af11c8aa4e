//! Display functions for command results

use super::formatters::{create_progress_bar, format_pattern};
use crate::commands::{BenchmarkResult, SolveResult, TuneResult};
use crate::core::{GuessedSet, Pattern};
use crate::solver::{Decision, Guess};
use colored::Colorize;

/// Print the result of solving a phrase
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.phrase.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, turn) in result.trace.iter().enumerate() {
        let letter = (turn.guess.to_ascii_uppercase() as char).to_string();
        let marker = if turn.hit {
            letter.green().bold()
        } else {
            letter.red().bold()
        };
        println!(
            "\nTurn {:2}: {}  {}",
            i + 1,
            marker,
            format_pattern(&turn.pattern)
        );

        if verbose {
            println!("  Remaining:  {}", turn.remaining);
        }
    }

    println!();
    let wrong = result.wrong_guesses();
    if result.success() {
        println!(
            "{}",
            format!(
                "✅ Solved in {} guesses ({wrong} wrong)",
                result.num_guesses()
            )
            .green()
            .bold()
        );
    } else if result.reset {
        println!("{}", "⚠️  Out of letters, game reset".yellow().bold());
    } else {
        println!(
            "{}",
            format!("❌ Failed after {} guesses ({wrong} wrong)", result.num_guesses())
                .red()
                .bold()
        );
    }
}

/// Print the next guess for a single game state
pub fn print_decision(pattern: &Pattern, guessed: GuessedSet, decision: &Decision) {
    println!("\nPattern:  {}", format_pattern(pattern).bright_yellow());
    println!("Guessed:  {guessed}");

    let counts: Vec<String> = decision
        .slot_candidates
        .iter()
        .map(ToString::to_string)
        .collect();
    println!("Candidates per slot: [{}]", counts.join(", "));

    match decision.guess {
        Guess::Letter(l) => println!(
            "Next guess: {} {}",
            (l.to_ascii_uppercase() as char).to_string().green().bold(),
            format!("({})", decision.tier).bright_black()
        ),
        Guess::Reset => println!("{}", "No letters left: reset".yellow().bold()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Phrases tested:   {}", result.total_phrases);
    println!(
        "   Success rate:     {}",
        format!("{:.1}%", result.success_rate * 100.0)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Solved / failed:  {} / {}",
        result.successes.to_string().green(),
        result.failures.to_string().red()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Average wrong:    {:.2}", result.average_wrong_guesses);
    if result.resets > 0 {
        println!("   Resets:           {}", result.resets.to_string().yellow());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Phrases/second:   {:.1}", result.phrases_per_second);

    println!("\n📈 {}", "Wrong guesses per round:".bright_cyan().bold());
    for (&wrong, &count) in &result.wrong_distribution {
        let pct = (count as f64 / result.total_phrases as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {wrong:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed_phrases.is_empty() {
        println!("\n❌ {}", "Failed:".bright_red().bold());
        for phrase in &result.failed_phrases {
            println!("   {phrase}");
        }
    }
}

/// Print the best weight combinations from a grid search
pub fn print_tune_result(result: &TuneResult, top: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WEIGHT SEARCH".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!("\nValid combinations: {}", result.combinations);

    for (rank, score) in result.ranked.iter().take(top).enumerate() {
        let line = format!(
            "{:2}. {}  win rate {:.3}  wrong {:.2}",
            rank + 1,
            score.weights,
            score.win_rate,
            score.average_wrong_guesses
        );
        if rank == 0 {
            println!("{}", line.green().bold());
        } else {
            println!("{line}");
        }
    }

    if let Some(best) = result.best() {
        let w = best.weights.to_array().map(|v| v.to_string());
        println!("\nUse with: --weights {}", w.join(","));
    }
}
