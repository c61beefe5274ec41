//! Command implementations

pub mod benchmark;
pub mod play;
pub mod random;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use play::{GameOutcome, SessionSummary, play_game, play_word, run_session};
pub use random::{SampleError, sample_words};
pub use solve::{SolveResult, SolveStep, solve_word};
