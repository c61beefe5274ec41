//! Per-game hangman strategy engine

use super::candidates::{CandidateSet, refine};
use super::strategy::GuessingStrategy;
use crate::core::{Guess, LetterSet, Pattern, Word};
use crate::game::GameView;
use crate::wordlists::Dictionary;
use tracing::debug;

/// Where the engine stands after its latest turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// More than one candidate remains
    Active,
    /// Exactly one candidate remains; every later turn guesses it
    Resolved,
}

/// Stateful guessing strategy for a single game
///
/// Keeps one candidate set, keyed by the pattern and effective guessed letters it was built
/// with, and replaces it wholesale whenever those tighten. The dictionary is shared; the
/// engine itself must not be reused for another game.
#[derive(Debug)]
pub struct StrategyEngine<'a> {
    dictionary: &'a Dictionary,
    current: Option<CandidateSet<'a>>,
}

impl<'a> StrategyEngine<'a> {
    /// Create an engine for one game played against `dictionary`
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            current: None,
        }
    }

    /// Candidate set used for the latest guess, `None` before the first turn
    #[must_use]
    pub const fn candidates(&self) -> Option<&CandidateSet<'a>> {
        self.current.as_ref()
    }

    /// `None` before the first turn
    #[must_use]
    pub fn state(&self) -> Option<EngineState> {
        self.current.as_ref().map(|set| {
            if set.len() == 1 {
                EngineState::Resolved
            } else {
                EngineState::Active
            }
        })
    }

    /// Choose the guess for the game's current state
    ///
    /// # Panics
    /// Panics if no dictionary word is consistent with the game (the secret is not in the
    /// dictionary) or if the engine is reused for a different game.
    pub fn decide(&mut self, game: &dyn GameView) -> Guess {
        let pattern = game.pattern();
        let effective = effective_guessed_letters(game);
        let candidates = self.advance(pattern, effective);

        assert!(
            !candidates.is_empty(),
            "no {}-letter dictionary word matches {pattern} with {effective} guessed: the secret is not in the dictionary",
            pattern.len()
        );

        if let Some(word) = candidates.only() {
            assert!(
                !game.wrong_words().contains(word),
                "{word} is the only candidate but was already rejected: the secret is not in the dictionary"
            );
            return Guess::Word(word.clone());
        }

        let blanks: Vec<usize> = pattern.blank_positions().collect();
        match blanks.as_slice() {
            &[blank] => Guess::Word(fill_last_blank(candidates, blank, effective).clone()),
            _ if game.wrong_guesses_remaining() == 0 => {
                Guess::Word(final_blow(candidates, game.wrong_letters()).clone())
            }
            _ => Guess::Letter(candidates.suggest_letter(effective)),
        }
    }

    fn advance(&mut self, pattern: &Pattern, guessed: LetterSet) -> &CandidateSet<'a> {
        let next = match self.current.take() {
            Some(set) if set.is_built_for(pattern, guessed) => set,
            Some(parent) => {
                let set = refine(&parent, pattern.clone(), guessed);
                debug!(
                    "Refined candidates for {pattern} / {guessed}: {} -> {}",
                    parent.len(),
                    set.len()
                );
                set
            }
            None => {
                let set = CandidateSet::from_words(
                    self.dictionary.words_of_len(pattern.len()),
                    pattern.clone(),
                    guessed,
                );
                debug!("Built {} candidates for {pattern} / {guessed}", set.len());
                set
            }
        };

        self.current.insert(next)
    }
}

impl GuessingStrategy for StrategyEngine<'_> {
    fn next_guess(&mut self, game: &dyn GameView) -> Guess {
        self.decide(game)
    }
}

/// Letters known not to fill any blank of the current pattern
///
/// The game's guessed letters plus every revealed letter. With a single blank left, each
/// rejected word that agrees with the revealed cells also proves its letter at that blank
/// wrong, so those letters are added too.
#[must_use]
pub fn effective_guessed_letters(game: &dyn GameView) -> LetterSet {
    let pattern = game.pattern();
    let mut effective = game.guessed_letters().union(pattern.revealed_letters());

    let mut blanks = pattern.blank_positions();
    if let (Some(blank), None) = (blanks.next(), blanks.next()) {
        effective.extend(
            game.wrong_words()
                .iter()
                .filter(|word| pattern.agrees_with(word))
                .map(|word| word.char_at(blank)),
        );
    }

    effective
}

fn fill_last_blank<'a>(candidates: &CandidateSet<'a>, blank: usize, effective: LetterSet) -> &'a Word {
    let letter = candidates.suggest_letter(effective);
    candidates
        .iter()
        .find(|word| word.char_at(blank) == letter)
        .unwrap_or_else(|| {
            panic!(
                "no candidate for {} holds {} at position {blank}",
                candidates.pattern(),
                letter as char
            )
        })
}

/// Pick the single word to guess when one more miss would lose the game
///
/// Candidates containing a known-wrong letter are skipped. Walking the letter ranking from
/// the top (ignoring `wrong`), the first remaining candidate that contains the current letter
/// is chosen; a letter no remaining candidate contains is passed over for the next one.
///
/// # Panics
/// Panics if `candidates` is empty.
#[must_use]
pub fn final_blow<'a>(candidates: &CandidateSet<'a>, wrong: LetterSet) -> &'a Word {
    let survivors: Vec<&'a Word> = candidates.iter().filter(|word| !word.has_any(wrong)).collect();

    candidates
        .ranked_letters()
        .iter()
        .copied()
        .filter(|&letter| !wrong.contains(letter))
        .find_map(|letter| survivors.iter().copied().find(|word| word.has_letter(letter)))
        .or_else(|| survivors.first().copied())
        .or_else(|| candidates.words().first().copied())
        .unwrap_or_else(|| panic!("final blow needs at least one candidate for {}", candidates.pattern()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameStatus, HangmanGame};

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_words(words.iter().copied())
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn letters(text: &str) -> LetterSet {
        text.bytes().collect()
    }

    /// A hand-built game state, for situations a real game reaches only after many turns
    struct StubView {
        pattern: Pattern,
        guessed: LetterSet,
        wrong: LetterSet,
        wrong_words: Vec<Word>,
        remaining: usize,
    }

    impl StubView {
        fn new(pattern: &str, guessed: &str, wrong: &str, remaining: usize) -> Self {
            Self {
                pattern: Pattern::new(pattern).unwrap(),
                guessed: letters(guessed),
                wrong: letters(wrong),
                wrong_words: Vec::new(),
                remaining,
            }
        }
    }

    impl GameView for StubView {
        fn pattern(&self) -> &Pattern {
            &self.pattern
        }

        fn guessed_letters(&self) -> LetterSet {
            self.guessed
        }

        fn wrong_letters(&self) -> LetterSet {
            self.wrong
        }

        fn wrong_words(&self) -> &[Word] {
            &self.wrong_words
        }

        fn wrong_guesses_remaining(&self) -> usize {
            self.remaining
        }
    }

    fn play(dictionary: &Dictionary, secret: &str, max_wrong: usize) -> (HangmanGame, Vec<Guess>) {
        let mut game = HangmanGame::new(word(secret), max_wrong);
        let mut engine = StrategyEngine::new(dictionary);
        let mut guesses = Vec::new();

        while game.status() == GameStatus::KeepGuessing {
            let guess = engine.next_guess(&game);
            game.apply(&guess).unwrap();
            guesses.push(guess);
        }

        (game, guesses)
    }

    #[test]
    fn cat_game_plays_out_exactly() {
        let dict = dictionary(&["cat", "bat", "car", "bar", "cars"]);
        let (game, guesses) = play(&dict, "cat", 5);

        assert_eq!(
            guesses,
            vec![
                Guess::Letter(b'A'),
                Guess::Letter(b'B'),
                Guess::Letter(b'C'),
                Guess::Word(word("car")),
                Guess::Word(word("cat")),
            ]
        );
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn first_guess_is_most_frequent_letter() {
        let dict = dictionary(&["cat", "bat", "car", "bar", "cars"]);
        let game = HangmanGame::new(word("cat"), 5);
        let mut engine = StrategyEngine::new(&dict);

        assert_eq!(engine.state(), None);
        assert_eq!(engine.next_guess(&game), Guess::Letter(b'A'));
        assert_eq!(engine.candidates().map(CandidateSet::len), Some(4));
        assert_eq!(engine.state(), Some(EngineState::Active));
    }

    #[test]
    fn lone_word_of_a_length_is_guessed_outright() {
        let dict = dictionary(&["cat", "bat", "zebra"]);
        let game = HangmanGame::new(word("zebra"), 5);
        let mut engine = StrategyEngine::new(&dict);

        assert_eq!(engine.next_guess(&game), Guess::Word(word("zebra")));
        assert_eq!(engine.state(), Some(EngineState::Resolved));
    }

    #[test]
    fn no_misses_allowed_commits_to_a_word() {
        let dict = dictionary(&["cat", "bat", "car", "bar"]);
        let game = HangmanGame::new(word("bar"), 0);
        let mut engine = StrategyEngine::new(&dict);

        assert_eq!(engine.next_guess(&game), Guess::Word(word("cat")));
    }

    #[test]
    fn last_chance_with_two_blanks_uses_final_blow() {
        let dict = dictionary(&["cat", "bat", "car", "bar", "cog"]);
        let view = StubView::new("---", "T", "T", 0);
        let mut engine = StrategyEngine::new(&dict);

        let guess = engine.next_guess(&view);
        assert_eq!(guess, Guess::Word(word("car")));
        assert!(!word("car").has_any(view.wrong));
    }

    #[test]
    fn spare_misses_with_two_blanks_guess_a_letter() {
        let dict = dictionary(&["cat", "bat", "car", "bar", "cog"]);
        let view = StubView::new("---", "T", "T", 1);
        let mut engine = StrategyEngine::new(&dict);

        assert_eq!(engine.next_guess(&view), Guess::Letter(b'A'));
    }

    #[test]
    fn single_blank_fills_with_best_letter() {
        let dict = dictionary(&["cat", "car", "cab", "bar"]);
        let view = StubView::new("CA-", "CA", "", 3);
        let mut engine = StrategyEngine::new(&dict);

        // B, R and T tie; alphabetical order picks B
        assert_eq!(engine.next_guess(&view), Guess::Word(word("cab")));
    }

    #[test]
    fn rejected_words_exclude_their_blank_letter() {
        let dict = dictionary(&["cat", "car", "cab"]);
        let mut view = StubView::new("CA-", "CA", "", 3);
        view.wrong_words.push(word("cab"));

        assert_eq!(effective_guessed_letters(&view), letters("ABC"));

        let mut engine = StrategyEngine::new(&dict);
        assert_eq!(engine.next_guess(&view), Guess::Word(word("car")));
        assert_eq!(engine.candidates().map(CandidateSet::len), Some(2));
    }

    #[test]
    fn rejected_words_ignored_with_several_blanks() {
        let mut view = StubView::new("C--", "C", "", 3);
        view.wrong_words.push(word("cab"));

        assert_eq!(effective_guessed_letters(&view), letters("C"));
    }

    #[test]
    fn revealed_letters_count_as_guessed() {
        let view = StubView::new("C-T", "", "", 3);
        assert_eq!(effective_guessed_letters(&view), letters("CT"));
    }

    #[test]
    fn final_blow_prefers_top_ranked_letter() {
        let dict = dictionary(&["cat", "bat", "car", "bar", "cog"]);
        let set = CandidateSet::from_words(dict.words_of_len(3), Pattern::blank(3), letters("T"));

        assert_eq!(final_blow(&set, letters("T")), &word("car"));
    }

    #[test]
    fn final_blow_skips_letters_no_survivor_has() {
        let dict = dictionary(&["cat", "car", "bug"]);
        let set = CandidateSet::from_words(dict.words_of_len(3), Pattern::blank(3), LetterSet::EMPTY);

        // C ranks first but only words holding the wrong letter A contain it
        assert_eq!(final_blow(&set, letters("A")), &word("bug"));
    }

    #[test]
    fn final_blow_without_survivors_falls_back_to_first_candidate() {
        let dict = dictionary(&["cat", "car"]);
        let set = CandidateSet::from_words(dict.words_of_len(3), Pattern::blank(3), LetterSet::EMPTY);

        assert_eq!(final_blow(&set, letters("A")), &word("cat"));
    }

    #[test]
    fn engine_reuses_set_when_nothing_changed() {
        let dict = dictionary(&["cat", "bat", "car", "bar"]);
        let game = HangmanGame::new(word("cat"), 5);
        let mut engine = StrategyEngine::new(&dict);

        let first = engine.next_guess(&game);
        let second = engine.next_guess(&game);
        assert_eq!(first, second);
    }

    #[test]
    #[should_panic(expected = "not in the dictionary")]
    fn secret_missing_from_dictionary_panics() {
        let dict = dictionary(&["cat", "bat"]);
        let view = StubView::new("---", "ABCT", "ABCT", 3);
        let mut engine = StrategyEngine::new(&dict);
        let _ = engine.next_guess(&view);
    }

    #[test]
    #[should_panic(expected = "already rejected")]
    fn rejected_singleton_panics() {
        let dict = dictionary(&["cat"]);
        let mut view = StubView::new("---", "", "", 3);
        view.wrong_words.push(word("cat"));
        let mut engine = StrategyEngine::new(&dict);
        let _ = engine.next_guess(&view);
    }

    #[test]
    #[should_panic(expected = "constraints must only tighten")]
    fn engine_reused_across_games_panics() {
        let dict = dictionary(&["cat", "bat", "car", "bar"]);
        let mut engine = StrategyEngine::new(&dict);

        let mut first = HangmanGame::new(word("cat"), 5);
        let guess = engine.next_guess(&first);
        first.apply(&guess).unwrap();
        let _ = engine.next_guess(&first);

        let second = HangmanGame::new(word("bar"), 5);
        let _ = engine.next_guess(&second);
    }
}
