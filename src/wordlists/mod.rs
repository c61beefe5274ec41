//! Dictionaries for hangman
//!
//! A [`Dictionary`] can be loaded from a file or built from the default word list embedded
//! into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS, WORDS_COUNT};
