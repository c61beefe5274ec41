//! Random secret picker

use crate::core::Word;
use crate::wordlists::Dictionary;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::fmt;

/// Error type for impossible sample sizes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleError {
    /// `requested` is zero or larger than the dictionary
    OutOfRange { requested: usize, available: usize },
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                requested,
                available,
            } => write!(
                f,
                "Invalid number of words {requested}: must be between 1 and {available}"
            ),
        }
    }
}

impl std::error::Error for SampleError {}

/// Pick `count` distinct dictionary words at random
///
/// # Errors
/// Returns `SampleError::OutOfRange` unless `1 <= count <= dictionary.len()`.
pub fn sample_words<'a, R>(dictionary: &'a Dictionary, count: usize, rng: &mut R) -> Result<Vec<&'a Word>, SampleError>
where
    R: Rng + ?Sized,
{
    let available = dictionary.len();
    if count == 0 || count > available {
        return Err(SampleError::OutOfRange {
            requested: count,
            available,
        });
    }

    Ok(dictionary.words().choose_multiple(rng, count).collect())
}
