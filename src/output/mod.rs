//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    game_line, print_benchmark_result, print_game_line, print_session_summary, print_solve_result,
    session_summary,
};
