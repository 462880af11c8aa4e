//! Word list loading utilities
//!
//! Provides functions to load word lists from files or fall back to the
//! embedded constants.

use super::embedded::{COMMON_WORDS, DOMAIN_WORDS, SAMPLE_PHRASES};
use crate::core::Lexicon;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// Load entries from a file, one per line
///
/// Lines are trimmed and lowercased; blank lines are skipped. Entries may be
/// multi-word phrases.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let entries = load_from_file("data/airline_words.txt").unwrap();
/// println!("Loaded {} entries", entries.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_entries(&content))
}

fn parse_entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Split phrase entries into their individual words
pub fn words_of<I, S>(entries: I) -> impl Iterator<Item = String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    entries.into_iter().flat_map(|entry| {
        entry
            .as_ref()
            .split_whitespace()
            .map(str::to_string)
            .collect::<Vec<_>>()
    })
}

/// Build the lexicon from a general dictionary and a domain list
///
/// Either source falls back to its embedded list when no path is given.
/// Domain entries that are phrases contribute each of their words.
///
/// # Errors
///
/// Returns an error naming the file if either path cannot be read.
pub fn build_lexicon(general: Option<&Path>, domain: Option<&Path>) -> Result<Lexicon> {
    let general_words = match general {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read dictionary {}", path.display()))?,
        None => COMMON_WORDS.iter().map(ToString::to_string).collect(),
    };
    let domain_entries = match domain {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read domain list {}", path.display()))?,
        None => DOMAIN_WORDS.iter().map(ToString::to_string).collect(),
    };

    let lexicon = Lexicon::merged(general_words, words_of(domain_entries));
    log::info!("Lexicon holds {} words", lexicon.len());
    Ok(lexicon)
}

/// Load the phrases to play, defaulting to the embedded sample set
///
/// # Errors
///
/// Returns an error naming the file if the path cannot be read.
pub fn load_phrases(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read phrases {}", path.display())),
        None => Ok(SAMPLE_PHRASES.iter().map(ToString::to_string).collect()),
    }
}

/// Domain entries used to sample tuning folds
///
/// # Errors
///
/// Returns an error naming the file if the path cannot be read.
pub fn load_domain_entries(path: Option<&Path>) -> Result<Vec<String>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read domain list {}", path.display())),
        None => Ok(DOMAIN_WORDS.iter().map(ToString::to_string).collect()),
    }
}
