//! Hangman game state
//!
//! [`HangmanGame`] tracks the secret, the revealed pattern and the guess history. Strategies
//! only ever see it through the read-only [`GameView`] trait.

mod hangman;
mod view;

pub use hangman::{GameError, GameStatus, HangmanGame, LOST_SCORE};
pub use view::GameView;
