//! Word solving command
//!
//! Plays one game for a chosen secret and returns the solution path.

use crate::core::{Guess, Pattern, Word};
use crate::game::{GameStatus, GameView, HangmanGame};
use crate::solver::{CandidateSet, StrategyEngine};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result, bail};

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: Word,
    pub status: GameStatus,
    pub score: usize,
    pub steps: Vec<SolveStep>,
}

impl SolveResult {
    #[must_use]
    pub fn won(&self) -> bool {
        self.status == GameStatus::Won
    }
}

/// A single turn of the solution
#[derive(Debug, Clone)]
pub struct SolveStep {
    pub guess: Guess,
    /// Candidates left when the guess was chosen
    pub candidates: usize,
    pub pattern_after: Pattern,
    /// True if the guess revealed something
    pub hit: bool,
    pub wrong_guesses_remaining: usize,
}

/// Solve a specific word with a fresh engine
///
/// # Errors
///
/// Returns an error if:
/// - The word is not a valid word
/// - The word is not in the dictionary
/// - The game refuses a guess
pub fn solve_word(dictionary: &Dictionary, word: &str, max_wrong_guesses: usize) -> Result<SolveResult> {
    let secret = Word::new(word).with_context(|| format!("Invalid word '{word}'"))?;
    if !dictionary.contains(secret.text()) {
        bail!("Word '{secret}' is not in dictionary!");
    }

    let mut game = HangmanGame::new(secret.clone(), max_wrong_guesses);
    let mut engine = StrategyEngine::new(dictionary);
    let mut steps = Vec::new();

    while game.status() == GameStatus::KeepGuessing {
        let guess = engine.decide(&game);
        let candidates = engine.candidates().map_or(0, CandidateSet::len);
        let wrong_before = game.wrong_guesses_made();

        game.apply(&guess)
            .with_context(|| format!("Game refused {guess}"))?;

        steps.push(SolveStep {
            guess,
            candidates,
            pattern_after: game.pattern().clone(),
            hit: game.wrong_guesses_made() == wrong_before,
            wrong_guesses_remaining: game.wrong_guesses_remaining(),
        });
    }

    Ok(SolveResult {
        secret,
        status: game.status(),
        score: game.score(),
        steps,
    })
}
