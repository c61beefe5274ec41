//! A single move in a hangman game

use super::Word;
use std::fmt;

/// Either a single letter or a whole word
///
/// Applying a guess to a game is the game's job; strategies only produce them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guess {
    /// Guess one upper-case letter
    Letter(u8),
    /// Guess the complete secret word
    Word(Word),
}

impl Guess {
    #[must_use]
    pub const fn is_word(&self) -> bool {
        matches!(self, Self::Word(_))
    }

    #[must_use]
    pub const fn is_letter(&self) -> bool {
        matches!(self, Self::Letter(_))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "GuessLetter[{}]", *letter as char),
            Self::Word(word) => write!(f, "GuessWord[{word}]"),
        }
    }
}
