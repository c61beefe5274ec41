//! Candidate sets
//!
//! A [`CandidateSet`] holds the words still consistent with one (pattern, guessed letters)
//! pair, plus per-letter statistics used to rank guesses. Sets are never mutated after
//! construction: when the game advances, [`refine`] builds a tighter set by filtering the
//! previous one instead of rescanning the dictionary.

use crate::core::{LetterSet, Pattern, Word};
use rustc_hash::FxHashMap;
use std::cell::OnceCell;
use std::cmp::Reverse;

/// Occurrence statistics of one letter within a candidate set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LetterStat {
    /// Total occurrences across all candidate words
    pub count: usize,
    /// Number of candidate words containing the letter at least once
    pub word_count: usize,
}

/// Words matching a pattern under a set of guessed letters
///
/// Invariants:
/// - every word has the pattern's length and matches it (see [`Pattern::matches`])
/// - statistics only count letters outside `guessed`, and each word counts at most once
///   towards a letter's `word_count`
///
/// Bound to one game: its statistics describe that game's exact guess history.
#[derive(Debug, Clone)]
pub struct CandidateSet<'a> {
    pattern: Pattern,
    guessed: LetterSet,
    words: Vec<&'a Word>,
    stats: FxHashMap<u8, LetterStat>,
    order: OnceCell<Vec<u8>>,
}

impl<'a> CandidateSet<'a> {
    /// Build a set from any source of words, keeping those that match
    ///
    /// The first set of a game is built from the dictionary's words of the pattern's
    /// length; later sets come from [`refine`].
    ///
    /// # Panics
    /// Panics if a source word's length differs from the pattern's.
    pub fn from_words<I>(source: I, pattern: Pattern, guessed: LetterSet) -> Self
    where
        I: IntoIterator<Item = &'a Word>,
    {
        let mut set = Self {
            pattern,
            guessed,
            words: Vec::new(),
            stats: FxHashMap::default(),
            order: OnceCell::new(),
        };

        for word in source {
            if set.pattern.matches(word, guessed) {
                set.add(word);
            }
        }

        set
    }

    fn add(&mut self, word: &'a Word) {
        for &letter in word.bytes() {
            if !self.guessed.contains(letter) {
                self.stats.entry(letter).or_default().count += 1;
            }
        }
        for letter in word.letters().iter() {
            if !self.guessed.contains(letter) {
                self.stats.entry(letter).or_default().word_count += 1;
            }
        }
        self.words.push(word);
    }

    /// Pattern the set was built for
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Guessed letters the set was built with
    #[must_use]
    pub const fn guessed_letters(&self) -> LetterSet {
        self.guessed
    }

    /// True when the set was built for exactly this (pattern, guessed letters) pair
    #[must_use]
    pub fn is_built_for(&self, pattern: &Pattern, guessed: LetterSet) -> bool {
        self.guessed == guessed && self.pattern == *pattern
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Member words in source order
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    /// The member word when exactly one remains
    #[must_use]
    pub fn only(&self) -> Option<&'a Word> {
        match self.words.as_slice() {
            [word] => Some(word),
            _ => None,
        }
    }

    /// Statistics for `letter`, `None` if it is guessed or absent from every word
    #[must_use]
    pub fn stat(&self, letter: u8) -> Option<LetterStat> {
        self.stats.get(&letter).copied()
    }

    /// Counted letters from most to least promising
    ///
    /// Ordered by descending `count`, then descending `word_count`, then alphabetically.
    /// Computed on first use and cached; the set never changes afterwards.
    pub fn ranked_letters(&self) -> &[u8] {
        self.order.get_or_init(|| {
            let mut letters: Vec<u8> = self.stats.keys().copied().collect();
            letters.sort_unstable_by_key(|letter| {
                let stat = self.stats[letter];
                (Reverse(stat.count), Reverse(stat.word_count), *letter)
            });
            letters
        })
    }

    /// Highest-ranked letter not in `excluded`
    ///
    /// # Panics
    /// Panics if every counted letter is excluded; callers must never exclude all of them.
    #[must_use]
    pub fn suggest_letter(&self, excluded: LetterSet) -> u8 {
        self.ranked_letters()
            .iter()
            .copied()
            .find(|&letter| !excluded.contains(letter))
            .unwrap_or_else(|| {
                panic!(
                    "no letter left to suggest: {} candidate(s) for {} are fully covered by {excluded}",
                    self.len(),
                    self.pattern
                )
            })
    }
}

/// Build a tighter candidate set by filtering `parent`
///
/// Only the parent's words are scanned, never the whole dictionary. The result is always a
/// subset of `parent`.
///
/// # Panics
/// Panics if the new constraints are not at least as strict as the parent's: the pattern
/// must keep every revealed letter and `guessed` must contain every letter the parent was
/// built with. Anything else means the set is being reused across games.
#[must_use]
pub fn refine<'a>(parent: &CandidateSet<'a>, pattern: Pattern, guessed: LetterSet) -> CandidateSet<'a> {
    assert!(
        pattern.refines(parent.pattern()) && guessed.is_superset(parent.guessed_letters()),
        "cannot refine candidates for {} / {} into {pattern} / {guessed}: constraints must only tighten",
        parent.pattern(),
        parent.guessed_letters(),
    );

    CandidateSet::from_words(parent.iter(), pattern, guessed)
}
