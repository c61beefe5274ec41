//! Revealed-so-far pattern of a hangman game
//!
//! A pattern is the secret word with every position that has not been revealed yet
//! replaced by [`BLANK`]. For the secret `FACTUAL` after guessing `A`, `T` and `L` the
//! pattern is `-A-T-AL`.

use super::{LetterSet, Word};
use std::fmt;

/// Marker for a position whose letter has not been revealed yet
pub const BLANK: u8 = b'-';

/// Fixed-length sequence of revealed letters and blanks
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<u8>,
}

/// Error type for unparsable patterns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    Empty,
    InvalidCharacter(char),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pattern must not be empty"),
            Self::InvalidCharacter(ch) => write!(
                f,
                "Pattern may only contain letters and '{}', got {ch:?}",
                BLANK as char
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Parse a pattern such as `"-A-"`
    ///
    /// Lower-case letters are normalised to upper case.
    ///
    /// # Errors
    /// Returns `PatternError` if the text is empty or holds anything other than ASCII
    /// letters and the blank marker.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::Pattern;
    ///
    /// let pattern = Pattern::new("c-t").unwrap();
    /// assert_eq!(pattern.to_string(), "C-T");
    /// assert_eq!(pattern.blank_count(), 1);
    /// ```
    pub fn new(text: &str) -> Result<Self, PatternError> {
        if text.is_empty() {
            return Err(PatternError::Empty);
        }

        let cells = text
            .chars()
            .map(|ch| match ch {
                'A'..='Z' | '-' => Ok(ch as u8),
                'a'..='z' => Ok(ch.to_ascii_uppercase() as u8),
                _ => Err(PatternError::InvalidCharacter(ch)),
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { cells })
    }

    /// A pattern of `len` blanks, the state of a fresh game
    #[must_use]
    pub fn blank(len: usize) -> Self {
        Self {
            cells: vec![BLANK; len],
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Raw cells, letters and [`BLANK`]s
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.cells
    }

    /// Get the cell at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.cells[position]
    }

    #[inline]
    #[must_use]
    pub fn is_blank(&self, position: usize) -> bool {
        self.cells[position] == BLANK
    }

    /// Number of unrevealed positions
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.blank_positions().count()
    }

    /// Indices of the unrevealed positions, in order
    pub fn blank_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&position| self.is_blank(position))
    }

    /// True when no blank remains
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cells.contains(&BLANK)
    }

    /// Letters revealed somewhere in the pattern
    ///
    /// Given `"AB-A--"` this is `{A, B}`.
    #[must_use]
    pub fn revealed_letters(&self) -> LetterSet {
        self.cells.iter().copied().filter(|&ch| ch != BLANK).collect()
    }

    /// Reveal every position where `secret` holds `letter`
    ///
    /// Returns `true` if at least one position matched.
    ///
    /// # Panics
    /// Panics if `secret` and the pattern differ in length.
    pub fn reveal(&mut self, secret: &Word, letter: u8) -> bool {
        assert_eq!(
            secret.len(),
            self.len(),
            "secret word length does not match pattern length"
        );

        let mut hit = false;
        for (cell, &ch) in self.cells.iter_mut().zip(secret.bytes()) {
            if ch == letter {
                *cell = ch;
                hit = true;
            }
        }
        hit
    }

    /// Reveal the whole secret, as a correct word guess does
    ///
    /// # Panics
    /// Panics if `secret` and the pattern differ in length.
    pub fn reveal_all(&mut self, secret: &Word) {
        assert_eq!(
            secret.len(),
            self.len(),
            "secret word length does not match pattern length"
        );
        self.cells.copy_from_slice(secret.bytes());
    }

    /// Check whether `word` is consistent with this pattern and the guessed letters
    ///
    /// Revealed cells must equal the word's letter at the same index; at every blank the
    /// word's letter must not be in `guessed` (a correctly guessed letter would have been
    /// revealed everywhere it occurs, a wrongly guessed one occurs nowhere).
    ///
    /// Given pattern `"AB-"` and guessed `{A, B}`, `"ABC"` and `"ABD"` match while
    /// `"ABA"`, `"ABB"` and `"XYZ"` do not.
    ///
    /// # Panics
    /// Panics if `word` and the pattern differ in length.
    #[must_use]
    pub fn matches(&self, word: &Word, guessed: LetterSet) -> bool {
        assert_eq!(
            word.len(),
            self.len(),
            "candidate word {word} does not have the pattern's length"
        );

        self.cells
            .iter()
            .zip(word.bytes())
            .all(|(&cell, &ch)| if cell == BLANK { !guessed.contains(ch) } else { cell == ch })
    }

    /// Check whether the revealed cells agree with `word`, ignoring blanks
    #[must_use]
    pub fn agrees_with(&self, word: &Word) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.bytes())
                .all(|(&cell, &ch)| cell == BLANK || cell == ch)
    }

    /// True when this pattern keeps every letter `parent` had revealed
    ///
    /// A later pattern of the same game always refines an earlier one.
    #[must_use]
    pub fn refines(&self, parent: &Self) -> bool {
        self.len() == parent.len()
            && parent
                .cells
                .iter()
                .zip(&self.cells)
                .all(|(&before, &after)| before == BLANK || before == after)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Cells are always ASCII
        for &ch in &self.cells {
            write!(f, "{}", ch as char)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
