//! The hangman game state machine

use super::GameView;
use crate::core::{Guess, LetterSet, Pattern, Word};
use std::fmt;

/// Score of a lost game, worse than any winnable score
pub const LOST_SCORE: usize = 25;

/// Current state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Won,
    Lost,
    KeepGuessing,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::KeepGuessing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won => write!(f, "GAME_WON"),
            Self::Lost => write!(f, "GAME_LOST"),
            Self::KeepGuessing => write!(f, "KEEP_GUESSING"),
        }
    }
}

/// Error type for guesses the game refuses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The game already reached a terminal status
    GameOver(GameStatus),
    /// The guessed letter is not an ASCII letter
    InvalidLetter(char),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(status) => {
                write!(f, "Cannot keep guessing in current game state: {status}")
            }
            Self::InvalidLetter(ch) => write!(f, "Cannot guess {ch:?}: not an ASCII letter"),
        }
    }
}

impl std::error::Error for GameError {}

/// A single game of hangman
///
/// A game is lost once the number of wrong guesses exceeds `max_wrong_guesses`; with a
/// budget of 5 the sixth miss loses.
#[derive(Debug, Clone)]
pub struct HangmanGame {
    secret: Word,
    pattern: Pattern,
    max_wrong_guesses: usize,
    correct_letters: LetterSet,
    wrong_letters: LetterSet,
    wrong_words: Vec<Word>,
}

impl HangmanGame {
    /// Start a game for `secret` allowing `max_wrong_guesses` misses
    #[must_use]
    pub fn new(secret: Word, max_wrong_guesses: usize) -> Self {
        let pattern = Pattern::blank(secret.len());
        Self {
            secret,
            pattern,
            max_wrong_guesses,
            correct_letters: LetterSet::new(),
            wrong_letters: LetterSet::new(),
            wrong_words: Vec::new(),
        }
    }

    /// Guess a letter and reveal every position that holds it
    ///
    /// # Errors
    /// Returns `GameError` if the game is over or `letter` is not an ASCII letter.
    pub fn guess_letter(&mut self, letter: u8) -> Result<&Pattern, GameError> {
        self.ensure_can_keep_guessing()?;
        if !letter.is_ascii_alphabetic() {
            return Err(GameError::InvalidLetter(letter as char));
        }

        let letter = letter.to_ascii_uppercase();
        if self.pattern.reveal(&self.secret, letter) {
            self.correct_letters.insert(letter);
        } else {
            self.wrong_letters.insert(letter);
        }

        Ok(&self.pattern)
    }

    /// Guess the whole word
    ///
    /// A wrong word is only counted once, however often it is repeated.
    ///
    /// # Errors
    /// Returns `GameError::GameOver` if the game is over.
    pub fn guess_word(&mut self, word: &Word) -> Result<&Pattern, GameError> {
        self.ensure_can_keep_guessing()?;

        if *word == self.secret {
            self.pattern.reveal_all(&self.secret);
        } else if !self.wrong_words.contains(word) {
            self.wrong_words.push(word.clone());
        }

        Ok(&self.pattern)
    }

    /// Apply a strategy's guess
    ///
    /// # Errors
    /// Same as [`Self::guess_letter`] and [`Self::guess_word`].
    pub fn apply(&mut self, guess: &Guess) -> Result<&Pattern, GameError> {
        match guess {
            Guess::Letter(letter) => self.guess_letter(*letter),
            Guess::Word(word) => self.guess_word(word),
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.wrong_guesses_made() > self.max_wrong_guesses {
            GameStatus::Lost
        } else {
            GameStatus::KeepGuessing
        }
    }

    /// Wrong letter and word guesses made so far
    #[must_use]
    pub fn wrong_guesses_made(&self) -> usize {
        self.wrong_letters.len() + self.wrong_words.len()
    }

    /// Score for the current state: lower is better
    ///
    /// [`LOST_SCORE`] for a lost game, otherwise wrong guesses plus correct letter guesses.
    #[must_use]
    pub fn score(&self) -> usize {
        if self.status() == GameStatus::Lost {
            LOST_SCORE
        } else {
            self.wrong_guesses_made() + self.correct_letters.len()
        }
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> usize {
        self.max_wrong_guesses
    }

    #[must_use]
    pub const fn correct_letters(&self) -> LetterSet {
        self.correct_letters
    }

    fn ensure_can_keep_guessing(&self) -> Result<(), GameError> {
        match self.status() {
            GameStatus::KeepGuessing => Ok(()),
            status => Err(GameError::GameOver(status)),
        }
    }
}

impl GameView for HangmanGame {
    fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    fn guessed_letters(&self) -> LetterSet {
        self.correct_letters.union(self.wrong_letters)
    }

    fn wrong_letters(&self) -> LetterSet {
        self.wrong_letters
    }

    fn wrong_words(&self) -> &[Word] {
        &self.wrong_words
    }

    fn wrong_guesses_remaining(&self) -> usize {
        self.max_wrong_guesses
            .saturating_sub(self.wrong_guesses_made())
    }
}

impl fmt::Display for HangmanGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; score={}; status={}",
            self.pattern,
            self.score(),
            self.status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(secret: &str, max_wrong_guesses: usize) -> HangmanGame {
        HangmanGame::new(Word::new(secret).unwrap(), max_wrong_guesses)
    }

    #[test]
    fn new_game_is_all_blank() {
        let game = game("factual", 5);
        assert_eq!(game.pattern().to_string(), "-------");
        assert_eq!(game.status(), GameStatus::KeepGuessing);
        assert_eq!(game.wrong_guesses_remaining(), 5);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn letter_guesses_update_pattern_and_sets() {
        let mut game = game("factual", 5);

        let pattern = game.guess_letter(b'a').unwrap();
        assert_eq!(pattern.to_string(), "-A---A-");

        game.guess_letter(b'R').unwrap();
        assert_eq!(game.correct_letters().iter().collect::<Vec<_>>(), vec![b'A']);
        assert_eq!(game.wrong_letters().iter().collect::<Vec<_>>(), vec![b'R']);
        assert_eq!(game.guessed_letters().len(), 2);
        assert_eq!(game.wrong_guesses_remaining(), 4);
        assert_eq!(game.score(), 2);
    }

    #[test]
    fn invalid_letter_rejected() {
        let mut game = game("cat", 5);
        assert_eq!(game.guess_letter(b'-'), Err(GameError::InvalidLetter('-')));
        assert_eq!(game.wrong_guesses_made(), 0);
    }

    #[test]
    fn correct_word_wins() {
        let mut game = game("cat", 5);
        game.guess_letter(b'A').unwrap();
        game.guess_word(&Word::new("cat").unwrap()).unwrap();

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.pattern().to_string(), "CAT");
        // One correct letter, word guess is free when right
        assert_eq!(game.score(), 1);
    }

    #[test]
    fn wrong_word_counted_once() {
        let mut game = game("cat", 5);
        let wrong = Word::new("car").unwrap();
        game.guess_word(&wrong).unwrap();
        game.guess_word(&wrong).unwrap();

        assert_eq!(game.wrong_words(), &[wrong]);
        assert_eq!(game.wrong_guesses_made(), 1);
        assert_eq!(game.pattern().to_string(), "---");
    }

    #[test]
    fn game_lost_after_exceeding_budget() {
        let mut game = game("cat", 1);
        game.guess_letter(b'X').unwrap();
        assert_eq!(game.status(), GameStatus::KeepGuessing);
        assert_eq!(game.wrong_guesses_remaining(), 0);

        game.guess_letter(b'Y').unwrap();
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.score(), LOST_SCORE);
    }

    #[test]
    fn guessing_after_game_over_fails() {
        let mut game = game("cat", 0);
        game.guess_letter(b'Z').unwrap();
        assert_eq!(game.status(), GameStatus::Lost);

        assert_eq!(
            game.apply(&Guess::Letter(b'C')),
            Err(GameError::GameOver(GameStatus::Lost))
        );
    }

    #[test]
    fn apply_dispatches_guess_kind() {
        let mut game = game("cat", 5);
        game.apply(&Guess::Letter(b'T')).unwrap();
        assert_eq!(game.pattern().to_string(), "--T");

        game.apply(&Guess::Word(Word::new("cat").unwrap())).unwrap();
        assert!(game.status().is_over());
    }

    #[test]
    fn display_shows_pattern_score_and_status() {
        let mut game = game("cat", 5);
        game.guess_letter(b'C').unwrap();
        game.guess_letter(b'T').unwrap();
        game.guess_letter(b'Q').unwrap();
        assert_eq!(game.to_string(), "C-T; score=3; status=KEEP_GUESSING");
    }
}
