//! Where patterns come from
//!
//! Filtering and scoring never call [`Pattern::calculate`] directly; they ask
//! a [`PatternSource`]. Swapping the source changes latency only, never the
//! patterns returned.

use crate::core::{Pattern, Word};
use crate::error::WordleError;

/// Something that can answer `compare(guess, answer)`
pub trait PatternSource: Sync {
    /// Pattern produced by playing `guess` against `answer`
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words differ in length
    fn pattern(&self, guess: &Word, answer: &Word) -> Result<Pattern, WordleError>;
}

impl<T: PatternSource + ?Sized> PatternSource for &T {
    fn pattern(&self, guess: &Word, answer: &Word) -> Result<Pattern, WordleError> {
        (**self).pattern(guess, answer)
    }
}

/// Computes every pattern from scratch
#[derive(Debug, Clone, Copy, Default)]
pub struct Uncached;

impl PatternSource for Uncached {
    #[inline]
    fn pattern(&self, guess: &Word, answer: &Word) -> Result<Pattern, WordleError> {
        Pattern::calculate(guess, answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncached_matches_calculate() {
        let guess = Word::new("relic").unwrap();
        let answer = Word::new("lyric").unwrap();
        assert_eq!(
            Uncached.pattern(&guess, &answer).unwrap(),
            Pattern::calculate(&guess, &answer).unwrap()
        );
    }

    #[test]
    fn references_are_sources() {
        fn via<P: PatternSource>(source: P, guess: &Word, answer: &Word) -> Pattern {
            source.pattern(guess, answer).unwrap()
        }

        let word = Word::new("crane").unwrap();
        assert!(via(&Uncached, &word, &word).is_solved());
    }
}
