//! JSON line adapter
//!
//! Reads one request object per input line and writes one response object
//! per output line. In auto mode each request carries the hidden phrase and
//! the whole round is played before responding.

use super::solve::{SolveConfig, solve_phrase};
use crate::core::{GuessedSet, Pattern};
use crate::solver::{Guess, Guesser};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

/// One game state from the caller
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuessRequest {
    current_word_state: String,
    #[serde(default)]
    guessed_letters: Vec<String>,
    /// Any JSON number; fractions are truncated
    guesses_remaining: f64,
    #[serde(default)]
    hidden_word: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct GuessResponse {
    next_guess: String,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct HistoryEntry {
    pattern: String,
    guess: String,
    remaining: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RoundResponse {
    history: Vec<HistoryEntry>,
    final_pattern: String,
    hidden_word: String,
    status: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    reset: bool,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Clamp a wire guess count into `0..=u32::MAX`
///
/// The float-to-int `as` cast saturates and maps NaN to zero.
fn remaining_guesses(value: f64) -> u32 {
    value.max(0.0) as u32
}

/// Answer a single game state
fn next_guess<G: Guesser + ?Sized>(guesser: &G, request: &GuessRequest) -> Result<GuessResponse> {
    let pattern: Pattern = request.current_word_state.parse()?;
    let guessed = GuessedSet::from_entries(&request.guessed_letters);

    if !pattern.has_blanks() || request.guesses_remaining <= 0.0 {
        return Ok(GuessResponse {
            next_guess: String::new(),
            status: Guess::Reset.status().as_str(),
        });
    }

    let remaining = remaining_guesses(request.guesses_remaining);
    let guess = guesser.next_guess(&pattern, guessed, remaining);
    Ok(GuessResponse {
        next_guess: guess.letter().map(|l| (l as char).to_string()).unwrap_or_default(),
        status: guess.status().as_str(),
    })
}

/// Play the round described by the request to completion
fn play_round<G: Guesser + ?Sized>(guesser: &G, request: &GuessRequest) -> Result<RoundResponse> {
    let hidden = request
        .hidden_word
        .as_deref()
        .context("hiddenWord is required in auto mode")?
        .trim()
        .to_lowercase();

    let start: Pattern = request.current_word_state.parse()?;
    let mut config = SolveConfig::new(hidden.clone())
        .with_start(start, GuessedSet::from_entries(&request.guessed_letters));
    config.max_guesses = remaining_guesses(request.guesses_remaining);

    let result = solve_phrase(&config, guesser)?;
    Ok(RoundResponse {
        history: result
            .trace
            .iter()
            .map(|turn| HistoryEntry {
                pattern: turn.pattern.to_string(),
                guess: (turn.guess as char).to_string(),
                remaining: turn.remaining,
            })
            .collect(),
        final_pattern: result.final_pattern.to_string(),
        hidden_word: hidden,
        status: result.status.as_str(),
        reset: result.reset,
    })
}

/// Turn one input line into one output line
///
/// Failures become an `{"error": ...}` object rather than an `Err`, so a bad
/// line never ends the session.
#[must_use]
pub fn handle_line<G: Guesser + ?Sized>(guesser: &G, line: &str, auto: bool) -> String {
    let outcome = serde_json::from_str::<GuessRequest>(line)
        .context("malformed request")
        .and_then(|request| {
            if auto {
                Ok(serde_json::to_string(&play_round(guesser, &request)?)?)
            } else {
                Ok(serde_json::to_string(&next_guess(guesser, &request)?)?)
            }
        });

    outcome.unwrap_or_else(|e| {
        log::warn!("Rejected request: {e:#}");
        let body = ErrorResponse {
            error: format!("{e:#}"),
        };
        serde_json::to_string(&body).unwrap_or_else(|_| String::from(r#"{"error":"internal"}"#))
    })
}

/// Serve requests until the input is exhausted
///
/// Blank lines are ignored. Each response is flushed as soon as it is
/// written.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_serve<G, R, W>(guesser: &G, input: R, mut output: W, auto: bool) -> Result<()>
where
    G: Guesser + ?Sized,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("failed to read request line")?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(output, "{}", handle_line(guesser, &line, auto))
            .context("failed to write response")?;
        output.flush().context("failed to flush response")?;
    }
    Ok(())
}
