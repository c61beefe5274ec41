//! Read-only view of a game, as consumed by guessing strategies

use crate::core::{LetterSet, Pattern, Word};

/// Everything a strategy may observe about a game in progress
pub trait GameView {
    /// Current pattern; unrevealed positions hold [`crate::core::BLANK`]
    fn pattern(&self) -> &Pattern;

    /// Every letter guessed so far, correct or not
    fn guessed_letters(&self) -> LetterSet;

    /// Letters guessed that do not occur in the secret
    fn wrong_letters(&self) -> LetterSet;

    /// Whole-word guesses the game rejected
    fn wrong_words(&self) -> &[Word];

    /// Wrong guesses still allowed; at zero the next wrong guess loses the game
    fn wrong_guesses_remaining(&self) -> usize;
}
