//! Guessing strategies
//!
//! Defines the trait the game driver talks to.

use crate::core::Guess;
use crate::game::GameView;

/// A source of guesses for one game
///
/// Called once per turn with the game's current state; the driver applies the returned
/// guess and calls again until the game is over.
pub trait GuessingStrategy {
    /// Choose the next guess for the game's current state
    fn next_guess(&mut self, game: &dyn GameView) -> Guess;
}
