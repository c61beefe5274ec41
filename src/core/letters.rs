//! Compact set of upper-case ASCII letters
//!
//! Guessed letters, wrong letters and the letters of a word are all small subsets of `A..=Z`,
//! so they are stored as a 26-bit mask.

use std::fmt;

/// A set of upper-case ASCII letters (`A..=Z`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LetterSet(u32);

impl LetterSet {
    /// The empty set
    pub const EMPTY: Self = Self(0);

    /// Create an empty set
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    #[inline]
    const fn bit(letter: u8) -> Option<u32> {
        if letter.is_ascii_uppercase() {
            Some(1 << (letter - b'A'))
        } else {
            None
        }
    }

    /// Insert a letter, returning `true` if it was not already present
    ///
    /// # Panics
    /// Panics if `letter` is not an upper-case ASCII letter.
    pub fn insert(&mut self, letter: u8) -> bool {
        let Some(bit) = Self::bit(letter) else {
            panic!("LetterSet only holds upper-case ASCII letters, got {letter:#04x}");
        };
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    /// Check membership; anything that is not an upper-case letter is never a member
    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        match Self::bit(letter) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letters present in either set
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when every letter of `other` is also in `self`
    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True when the two sets share at least one letter
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for LetterSet {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for letter in iter {
            self.insert(letter);
        }
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, letter) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", letter as char)?;
        }
        write!(f, "}}")
    }
}
