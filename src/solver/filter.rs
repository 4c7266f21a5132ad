//! Candidate filtering
//!
//! Narrow a candidate list to the words that would have produced an observed
//! pattern. Results are order-preserving subsequences of the input; an empty
//! result is a valid answer, not an error.

use super::source::PatternSource;
use crate::core::{Pattern, Word};
use crate::error::WordleError;

/// Keep the candidates `c` for which `compare(guess, c) == pattern`
///
/// # Errors
/// Returns `LengthMismatch` if the pattern or a candidate does not have the
/// guess's length
///
/// # Examples
/// ```
/// use wordle_narrow::core::{Dictionary, Word};
/// use wordle_narrow::solver::{Uncached, filter};
///
/// let dictionary = Dictionary::parse("sight eight light night might bight").unwrap();
/// let guess = Word::new("sleep").unwrap();
/// let pattern = "__*__".parse().unwrap();
///
/// let remaining = filter(&guess, pattern, &dictionary.refs(), &Uncached).unwrap();
/// assert_eq!(remaining.len(), 1);
/// assert_eq!(remaining[0].text(), "eight");
/// ```
pub fn filter<'a, P: PatternSource + ?Sized>(
    guess: &Word,
    pattern: Pattern,
    candidates: &[&'a Word],
    source: &P,
) -> Result<Vec<&'a Word>, WordleError> {
    if guess.len() != pattern.len() {
        return Err(WordleError::LengthMismatch {
            expected: guess.len(),
            actual: pattern.len(),
        });
    }

    let mut remaining = Vec::new();
    for &candidate in candidates {
        if source.pattern(guess, candidate)? == pattern {
            remaining.push(candidate);
        }
    }
    Ok(remaining)
}

/// Filter by the pattern `guess` would produce against `answer`
///
/// # Errors
/// Returns `LengthMismatch` if the words differ in length
pub fn filter_by_answer<'a, P: PatternSource + ?Sized>(
    guess: &Word,
    answer: &Word,
    candidates: &[&'a Word],
    source: &P,
) -> Result<Vec<&'a Word>, WordleError> {
    let pattern = source.pattern(guess, answer)?;
    filter(guess, pattern, candidates, source)
}

/// Keep the candidates consistent with every `(guess, pattern)` observed
///
/// # Errors
/// Returns `LengthMismatch` on any length disagreement
pub fn filter_history<'a, P: PatternSource + ?Sized>(
    history: &[(Word, Pattern)],
    candidates: &[&'a Word],
    source: &P,
) -> Result<Vec<&'a Word>, WordleError> {
    let mut remaining = candidates.to_vec();
    for (guess, pattern) in history {
        remaining = filter(guess, *pattern, &remaining, source)?;
        if remaining.is_empty() {
            break;
        }
    }
    Ok(remaining)
}
