//! Word list loading utilities
//!
//! Provides functions to load dictionaries from files or from the embedded list.

use super::Dictionary;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Every whitespace-separated token is one word; tokens that are not valid words are
/// skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_solver::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Dictionary> {
    let content = fs::read_to_string(path)?;
    Ok(Dictionary::from_words(content.split_whitespace()))
}

/// Convert an embedded string slice to a dictionary
///
/// # Examples
/// ```
/// use hangman_solver::wordlists::loader::words_from_slice;
/// use hangman_solver::wordlists::WORDS;
///
/// let dictionary = words_from_slice(WORDS);
/// assert!(!dictionary.is_empty());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Dictionary {
    Dictionary::from_words(slice.iter().copied())
}
