//! Read-only dictionary indexed by word length

use crate::core::Word;
use rustc_hash::FxHashMap;
use tracing::debug;

/// A de-duplicated set of upper-case words
///
/// Keeps first-seen order so candidate ordering (and therefore every tie the strategy
/// breaks by position) is reproducible for a given input. Shared read-only by any
/// number of games.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    by_length: FxHashMap<usize, Vec<usize>>,
    index: FxHashMap<String, usize>,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Entries that are not valid words are skipped (and logged at debug level);
    /// duplicates (case-insensitive) are kept once.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "CAT", "bat", "can't"]);
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("Cat"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for text in words {
            let text = text.as_ref().trim();
            match Word::new(text) {
                Ok(word) => {
                    dictionary.insert(word);
                }
                Err(err) if !text.is_empty() => debug!("Skipping dictionary entry '{text}': {err}"),
                Err(_) => {}
            }
        }
        dictionary
    }

    fn insert(&mut self, word: Word) -> bool {
        if self.index.contains_key(word.text()) {
            return false;
        }

        let position = self.words.len();
        self.index.insert(word.text().to_string(), position);
        self.by_length.entry(word.len()).or_default().push(position);
        self.words.push(word);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look up a word, ignoring case
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        self.index
            .get(&text.trim().to_ascii_uppercase())
            .map(|&position| &self.words[position])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.get(text).is_some()
    }

    /// All words in first-seen order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Words of exactly `len` letters, in first-seen order
    pub fn words_of_len(&self, len: usize) -> impl Iterator<Item = &Word> + '_ {
        self.by_length
            .get(&len)
            .map_or(&[][..], Vec::as_slice)
            .iter()
            .map(|&position| &self.words[position])
    }

    /// Number of words of exactly `len` letters
    #[must_use]
    pub fn count_of_len(&self, len: usize) -> usize {
        self.by_length.get(&len).map_or(0, Vec::len)
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn texts<'a>(words: impl Iterator<Item = &'a Word>) -> Vec<&'a str> {
        words.map(Word::text).collect()
    }

    #[test]
    fn from_words_normalises_and_dedupes() {
        let dictionary = Dictionary::from_words(["cat", "BAT", "Cat", " car ", ""]);

        assert_eq!(dictionary.len(), 3);
        assert_eq!(texts(dictionary.words().iter()), vec!["CAT", "BAT", "CAR"]);
    }

    #[test]
    fn from_words_skips_invalid() {
        let dictionary = Dictionary::from_words(["cat", "can't", "c4t", "dog"]);
        assert_eq!(texts(dictionary.words().iter()), vec!["CAT", "DOG"]);
    }

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn skipped_entries_are_logged() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let dictionary = tracing::subscriber::with_default(subscriber, || {
            Dictionary::from_words(["cat", "can't", "  ", "c4t"])
        });
        assert_eq!(dictionary.len(), 1);

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Skipping dictionary entry 'can't'"), "{logs}");
        assert!(logs.contains("Skipping dictionary entry 'c4t'"), "{logs}");
        assert_eq!(logs.matches("Skipping").count(), 2, "{logs}");
    }

    #[test]
    fn words_of_len_keeps_order() {
        let dictionary = Dictionary::from_words(["cat", "cars", "bat", "bars", "a"]);

        assert_eq!(texts(dictionary.words_of_len(3)), vec!["CAT", "BAT"]);
        assert_eq!(texts(dictionary.words_of_len(4)), vec!["CARS", "BARS"]);
        assert_eq!(dictionary.words_of_len(9).count(), 0);
        assert_eq!(dictionary.count_of_len(4), 2);
        assert_eq!(dictionary.lengths(), vec![1, 3, 4]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary = Dictionary::from_words(["cat"]);

        assert!(dictionary.contains("CAT"));
        assert!(dictionary.contains("cat"));
        assert_eq!(dictionary.get("Cat").map(Word::text), Some("CAT"));
        assert!(!dictionary.contains("dog"));
    }

    #[test]
    fn empty_dictionary() {
        let dictionary = Dictionary::from_words(Vec::<String>::new());
        assert!(dictionary.is_empty());
        assert!(dictionary.lengths().is_empty());
    }
}
