//! Precomputed `guess × answer` pattern table
//!
//! Builds every pattern for a dictionary up front, one row per guess, rows in
//! parallel. Worth it when many scores are computed over the same dictionary,
//! e.g. when ranking every word.

use std::time::Instant;

use log::debug;
use rayon::prelude::*;

use super::source::PatternSource;
use crate::core::{Dictionary, Pattern, Word};
use crate::error::WordleError;

/// Dense table of pattern codes for one dictionary
///
/// Immutable once built, so it can be read from any number of threads.
#[derive(Debug)]
pub struct PatternTable<'d> {
    dictionary: &'d Dictionary,
    codes: Vec<u32>,
}

impl<'d> PatternTable<'d> {
    /// Compute all `len²` patterns of `dictionary`
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Dictionary, Word};
    /// use wordle_narrow::solver::{PatternSource, PatternTable};
    ///
    /// let dictionary = Dictionary::parse("relic lyric cocoa coach").unwrap();
    /// let table = PatternTable::build(&dictionary);
    ///
    /// let relic = Word::new("relic").unwrap();
    /// let lyric = Word::new("lyric").unwrap();
    /// assert_eq!(table.pattern(&relic, &lyric).unwrap().to_string(), "*_*##");
    /// ```
    #[must_use]
    pub fn build(dictionary: &'d Dictionary) -> Self {
        let start = Instant::now();
        let words = dictionary.words();
        let n = words.len();
        let mut codes = vec![0u32; n * n];

        codes
            .par_chunks_mut(n)
            .zip(words.par_iter())
            .for_each(|(row, guess)| {
                for (slot, answer) in row.iter_mut().zip(words) {
                    *slot = Pattern::calculate_unchecked(guess, answer).value();
                }
            });

        debug!(
            "built {n}x{n} pattern table in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        Self { dictionary, codes }
    }

    /// Dictionary the table was built for
    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dictionary
    }

    /// Number of stored patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Pattern for two dictionary positions
    ///
    /// # Panics
    /// Panics if either index is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, guess_index: usize, answer_index: usize) -> Pattern {
        let n = self.dictionary.len();
        assert!(guess_index < n && answer_index < n, "index out of range");
        Pattern::from_code(
            self.codes[guess_index * n + answer_index],
            self.dictionary.word_len(),
        )
    }
}

impl PatternSource for PatternTable<'_> {
    fn pattern(&self, guess: &Word, answer: &Word) -> Result<Pattern, WordleError> {
        match (self.dictionary.index_of(guess), self.dictionary.index_of(answer)) {
            (Some(g), Some(a)) => Ok(self.get(g, a)),
            // Words outside the dictionary are computed on demand
            _ => Pattern::calculate(guess, answer),
        }
    }
}
