//! Hangman Solver
//!
//! Plays hangman against a dictionary: each turn it narrows the words still consistent with
//! the revealed pattern and picks either the most common unguessed letter or a whole word.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_solver::core::Word;
//! use hangman_solver::game::{GameStatus, HangmanGame};
//! use hangman_solver::solver::StrategyEngine;
//! use hangman_solver::commands::play_game;
//! use hangman_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["cat", "bat", "car", "bar"]);
//! let mut game = HangmanGame::new(Word::new("cat").unwrap(), 5);
//! let mut engine = StrategyEngine::new(&dictionary);
//!
//! let outcome = play_game(&mut game, &mut engine);
//! assert_eq!(outcome.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Guessing strategy
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
