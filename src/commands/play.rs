//! Game driver and stdin session
//!
//! Plays games to completion and scores a whole session of secret words.

use crate::core::{Guess, Word};
use crate::game::{GameStatus, HangmanGame};
use crate::solver::{GuessingStrategy, StrategyEngine};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::{debug, warn};

/// How a single game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub secret: Word,
    pub status: GameStatus,
    pub score: usize,
    pub guesses: Vec<Guess>,
}

/// Play `game` to completion, asking `strategy` for every guess
///
/// # Panics
/// Panics if the game rejects a guess while still in progress, which only happens when the
/// strategy produces a letter that is not an ASCII letter.
pub fn play_game(game: &mut HangmanGame, strategy: &mut impl GuessingStrategy) -> GameOutcome {
    let mut guesses = Vec::new();

    while game.status() == GameStatus::KeepGuessing {
        debug!("{game}");
        let guess = strategy.next_guess(&*game);
        debug!("{guess}");

        if let Err(e) = game.apply(&guess) {
            panic!("strategy produced a guess the game refused: {e}");
        }
        guesses.push(guess);
    }
    debug!("{game}");

    GameOutcome {
        secret: game.secret().clone(),
        status: game.status(),
        score: game.score(),
        guesses,
    }
}

/// Play one game for `secret` with a fresh engine
#[must_use]
pub fn play_word(dictionary: &Dictionary, secret: &Word, max_wrong_guesses: usize) -> GameOutcome {
    let mut game = HangmanGame::new(secret.clone(), max_wrong_guesses);
    let mut engine = StrategyEngine::new(dictionary);
    play_game(&mut game, &mut engine)
}

/// Totals over every game of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games: usize,
    pub total_score: usize,
}

impl SessionSummary {
    /// Mean score per game, 0 for an empty session
    #[must_use]
    pub fn average_score(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_score as f64 / self.games as f64
        }
    }
}

/// Play a game for every whitespace-separated word read from `reader`
///
/// Words missing from the dictionary are reported and skipped. Each finished game is
/// handed to `on_game`.
///
/// # Errors
/// Returns an error if reading from `reader` fails.
pub fn run_session<R, F>(
    dictionary: &Dictionary,
    reader: R,
    max_wrong_guesses: usize,
    mut on_game: F,
) -> Result<SessionSummary>
where
    R: BufRead,
    F: FnMut(&GameOutcome),
{
    let mut summary = SessionSummary::default();

    for line in reader.lines() {
        let line = line.context("Failed to read words from input")?;

        for token in line.split_whitespace() {
            let Some(secret) = dictionary.get(token) else {
                warn!("Word '{token}' is not in dictionary!");
                continue;
            };

            let outcome = play_word(dictionary, secret, max_wrong_guesses);
            summary.games += 1;
            summary.total_score += outcome.score;
            on_game(&outcome);
        }
    }

    Ok(summary)
}
