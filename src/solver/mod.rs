//! Hangman guessing strategy
//!
//! Candidate filtering plus the letter and word selection policy.

mod candidates;
mod engine;
pub mod strategy;

pub use candidates::{CandidateSet, LetterStat, refine};
pub use engine::{EngineState, StrategyEngine, effective_guessed_letters, final_blow};
pub use strategy::GuessingStrategy;
