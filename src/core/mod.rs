//! Core domain types for hangman
//!
//! Plain values with no game logic: words, revealed-so-far patterns, letter sets and guesses.
//! Everything here is pure and cheap to test in isolation.

mod guess;
mod letters;
mod pattern;
mod word;

pub use guess::Guess;
pub use letters::LetterSet;
pub use pattern::{BLANK, Pattern, PatternError};
pub use word::{Word, WordError};
