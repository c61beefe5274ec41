//! Hangman Solver - CLI
//!
//! Reads secret words from stdin and plays each one, or solves, benchmarks and samples
//! words on demand.

use anyhow::{Context, Result, bail};
use clap::builder::{FalseyValueParser, RangedU64ValueParser};
use clap::{Parser, Subcommand};
use hangman_solver::{
    commands::{run_benchmark, run_session, sample_words, solve_word},
    output::{print_benchmark_result, print_game_line, print_session_summary, print_solve_result},
    wordlists::{Dictionary, WORDS, loader::load_from_file, loader::words_from_slice},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman solver using incremental candidate filtering and letter-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file of whitespace-separated words (built-in list when omitted)
    #[arg(short, long, global = true, env = "hangman_dict")]
    dict: Option<PathBuf>,

    /// Wrong guesses allowed before a game is lost
    #[arg(
        short,
        long,
        global = true,
        env = "hangman_guesses",
        default_value_t = 5,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    guesses: usize,

    /// Trace every turn to stderr (any value of `hangman_debug` but a falsey one enables it)
    #[arg(long, global = true, env = "hangman_debug", value_parser = FalseyValueParser::new())]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play every word read from stdin and print the scores (default)
    Play,

    /// Solve a specific secret word
    Solve {
        /// The secret word
        word: String,

        /// Show candidate counts for every turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every dictionary word and report score statistics
    Benchmark {
        /// Only play the first N dictionary words
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print distinct random dictionary words, one per line
    Random {
        /// Number of words to print
        count: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the configured dictionary file, or the built-in list
fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    let dictionary = match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Cannot open dictionary file '{}' for reading", path.display()))?,
        None => words_from_slice(WORDS),
    };

    if dictionary.is_empty() {
        bail!("Dictionary contains no valid words");
    }

    tracing::debug!(
        "Loaded {} words of lengths {:?}",
        dictionary.len(),
        dictionary.lengths()
    );
    Ok(dictionary)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let dictionary = load_dictionary(cli.dict.as_deref())?;

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, cli.guesses),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&dictionary, &word, cli.guesses)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(&dictionary, count, cli.guesses);
            Ok(())
        }
        Commands::Random { count, seed } => run_random_command(&dictionary, count, seed),
    }
}

fn run_play_command(dictionary: &Dictionary, guesses: usize) -> Result<()> {
    let stdin = io::stdin();
    let summary = run_session(dictionary, stdin.lock(), guesses, print_game_line)?;
    print_session_summary(&summary);
    Ok(())
}

fn run_benchmark_command(dictionary: &Dictionary, count: Option<usize>, guesses: usize) {
    let words = dictionary.words();
    let count = count.unwrap_or(words.len()).min(words.len());

    println!("Running benchmark on {count} words with {guesses} wrong guesses allowed...");
    let result = run_benchmark(dictionary, &words[..count], guesses);
    print_benchmark_result(&result);
}

fn run_random_command(dictionary: &Dictionary, count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    for word in sample_words(dictionary, count, &mut rng)? {
        println!("{word}");
    }
    Ok(())
}
