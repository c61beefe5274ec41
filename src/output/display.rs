//! Display functions for command results

use super::formatters::{create_progress_bar, format_general, spaced_pattern};
use crate::commands::{BenchmarkResult, GameOutcome, SessionSummary, SolveResult};
use crate::core::Guess;
use colored::Colorize;

/// One line per finished game, `WORD = score`
#[must_use]
pub fn game_line(outcome: &GameOutcome) -> String {
    format!("{} = {}", outcome.secret, outcome.score)
}

/// Closing block of a session
#[must_use]
pub fn session_summary(summary: &SessionSummary) -> String {
    format!(
        "-----------------------------\nAVG: {}\nNUM: {}\nTOTAL: {}",
        format_general(summary.average_score()),
        summary.games,
        summary.total_score
    )
}

pub fn print_game_line(outcome: &GameOutcome) {
    println!("{}", game_line(outcome));
}

pub fn print_session_summary(summary: &SessionSummary) {
    println!("{}", session_summary(summary));
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let guess = match &step.guess {
            Guess::Letter(letter) => format!("letter {}", *letter as char),
            Guess::Word(word) => format!("word   {word}"),
        };
        let guess = if step.hit { guess.green() } else { guess.red() };

        println!("\nTurn {}: {guess}  {}", i + 1, spaced_pattern(&step.pattern_after));

        if verbose {
            println!("  Candidates: {}", step.candidates);
            println!("  Misses left: {}", step.wrong_guesses_remaining);
        }
    }

    println!();
    if result.won() {
        println!(
            "{}",
            format!("✅ Solved in {} guesses, score {}", result.steps.len(), result.score)
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Lost after {} guesses, score {}", result.steps.len(), result.score)
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Won / lost:       {} / {}",
        result.wins.to_string().green(),
        result.losses.to_string().red()
    );
    println!(
        "   Average score:    {}",
        format!("{:.2}", result.average_score).bright_yellow().bold()
    );
    println!("   Best score:       {}", result.min_score.to_string().green());
    println!("   Worst score:      {}", result.max_score.to_string().yellow());
    println!("   Total score:      {}", result.total_score);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&score, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {score:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::GameStatus;

    #[test]
    fn game_line_shows_word_and_score() {
        let outcome = GameOutcome {
            secret: Word::new("cat").unwrap(),
            status: GameStatus::Won,
            score: 4,
            guesses: Vec::new(),
        };
        assert_eq!(game_line(&outcome), "CAT = 4");
    }

    #[test]
    fn session_summary_block() {
        let summary = SessionSummary {
            games: 3,
            total_score: 10,
        };
        assert_eq!(
            session_summary(&summary),
            "-----------------------------\nAVG: 3.33333\nNUM: 3\nTOTAL: 10"
        );
    }

    #[test]
    fn empty_session_summary() {
        assert_eq!(
            session_summary(&SessionSummary::default()),
            "-----------------------------\nAVG: 0\nNUM: 0\nTOTAL: 0"
        );
    }
}
