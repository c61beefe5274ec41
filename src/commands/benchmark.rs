//! Benchmark command
//!
//! Plays the engine against many secrets and summarises the scores.

use super::play::play_word;
use crate::core::Word;
use crate::game::GameStatus;
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub wins: usize,
    pub losses: usize,
    pub total_score: usize,
    pub average_score: f64,
    pub min_score: usize,
    pub max_score: usize,
    /// Score -> number of games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

impl BenchmarkResult {
    /// Share of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_words as f64
        }
    }
}

/// Play one game per word in `words`, one after another
///
/// Every word must be in `dictionary`.
pub fn run_benchmark<'a, I>(dictionary: &Dictionary, words: I, max_wrong_guesses: usize) -> BenchmarkResult
where
    I: IntoIterator<Item = &'a Word>,
    I::IntoIter: ExactSizeIterator,
{
    let words = words.into_iter();
    let total_words = words.len();

    let pb = ProgressBar::new(total_words as u64);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let mut wins = 0;
    let mut total_score = 0;
    let mut min_score = usize::MAX;
    let mut max_score = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for secret in words {
        let outcome = play_word(dictionary, secret, max_wrong_guesses);

        if outcome.status == GameStatus::Won {
            wins += 1;
        }
        total_score += outcome.score;
        min_score = min_score.min(outcome.score);
        max_score = max_score.max(outcome.score);
        *distribution.entry(outcome.score).or_insert(0) += 1;

        pb.set_message(format!("{} = {}", outcome.secret, outcome.score));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    let (average_score, words_per_second) = if total_words == 0 {
        min_score = 0;
        (0.0, 0.0)
    } else {
        (
            total_score as f64 / total_words as f64,
            total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
        )
    };

    BenchmarkResult {
        total_words,
        wins,
        losses: total_words - wins,
        total_score,
        average_score,
        min_score,
        max_score,
        distribution,
        duration,
        words_per_second,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::LOST_SCORE;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["cat", "bat", "car", "bar", "cars", "eel", "elk"])
    }

    #[test]
    fn benchmark_runs() {
        let dict = dictionary();
        let result = run_benchmark(&dict, dict.words(), 5);

        assert_eq!(result.total_words, 7);
        assert_eq!(result.wins + result.losses, 7);
        assert!(result.min_score <= result.max_score);
        assert!(result.max_score <= LOST_SCORE);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let dict = dictionary();
        let result = run_benchmark(&dict, dict.words(), 5);

        let games: usize = result.distribution.values().sum();
        assert_eq!(games, result.total_words);

        let score: usize = result.distribution.iter().map(|(score, n)| score * n).sum();
        assert_eq!(score, result.total_score);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let dict = dictionary();
        let result = run_benchmark(&dict, dict.words(), 5);

        assert!(result.average_score >= result.min_score as f64);
        assert!(result.average_score <= result.max_score as f64);
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn benchmark_single_known_game() {
        let dict = dictionary();
        let cat = dict.get("cat").unwrap();
        let result = run_benchmark(&dict, [cat], 5);

        assert_eq!(result.wins, 1);
        assert_eq!(result.min_score, 4);
        assert_eq!(result.max_score, 4);
        assert_eq!(result.distribution.get(&4), Some(&1));
    }

    #[test]
    fn benchmark_empty_word_list() {
        let dict = dictionary();
        let result = run_benchmark(&dict, &[] as &[Word], 5);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_score, 0);
        assert_eq!(result.min_score, 0);
        assert!(result.distribution.is_empty());
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
