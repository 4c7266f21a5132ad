//! Mean-remaining guess scoring
//!
//! Scores a guess by the average number of candidates left after playing it,
//! taken over every candidate as the possible answer. Lower is better.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::source::PatternSource;
use crate::core::{Pattern, Word};
use crate::error::WordleError;

/// A word with its score against some candidate set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Expected number of candidates remaining after guessing `guess`
///
/// For each candidate taken as the answer, the candidates sharing its
/// pattern remain. When `guess` is itself one of the candidates, one is
/// subtracted from every term: a guess that might be right is credited for
/// possibly ending the game. The sum is divided by the number of candidates.
///
/// Candidates are grouped by pattern, so each group of size `k` contributes
/// `k²`; the result equals filtering once per candidate, in O(n).
///
/// # Errors
/// - `EmptyCandidateSet` if `candidates` is empty
/// - `LengthMismatch` if a candidate's length differs from the guess
///
/// # Examples
/// ```
/// use wordle_narrow::core::{Dictionary, Word};
/// use wordle_narrow::solver::{Uncached, score};
///
/// let dictionary = Dictionary::parse("sight eight light night might bight").unwrap();
/// let guess = Word::new("sleep").unwrap();
///
/// // groups: {sight} {eight} {light} {night, might, bight} -> (1+1+1+9) / 6
/// assert_eq!(score(&guess, &dictionary.refs(), &Uncached).unwrap(), 2.0);
/// ```
pub fn score<P: PatternSource + ?Sized>(
    guess: &Word,
    candidates: &[&Word],
    source: &P,
) -> Result<f64, WordleError> {
    if candidates.is_empty() {
        return Err(WordleError::EmptyCandidateSet);
    }

    let groups = group_by_pattern(guess, candidates, source)?;
    let squares: usize = groups.values().map(|&k| k * k).sum();

    let n = candidates.len();
    let discount = if candidates.contains(&guess) { n } else { 0 };

    Ok((squares - discount) as f64 / n as f64)
}

/// Group candidates by the pattern they produce with the guess
fn group_by_pattern<P: PatternSource + ?Sized>(
    guess: &Word,
    candidates: &[&Word],
    source: &P,
) -> Result<FxHashMap<Pattern, usize>, WordleError> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let pattern = source.pattern(guess, candidate)?;
        *counts.entry(pattern).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Score every guess against `candidates`, best first
///
/// Guesses are scored in parallel. Ties keep the order of `guesses`.
///
/// # Errors
/// Same as [`score`]
pub fn rank<'a, P: PatternSource + ?Sized>(
    guesses: &[&'a Word],
    candidates: &[&Word],
    source: &P,
) -> Result<Vec<ScoredWord<'a>>, WordleError> {
    rank_with(guesses, candidates, source, |_| {})
}

/// [`rank`], calling `on_scored` as each guess finishes (from worker threads)
///
/// # Errors
/// Same as [`score`]
pub fn rank_with<'a, P, F>(
    guesses: &[&'a Word],
    candidates: &[&Word],
    source: &P,
    on_scored: F,
) -> Result<Vec<ScoredWord<'a>>, WordleError>
where
    P: PatternSource + ?Sized,
    F: Fn(&ScoredWord<'a>) + Sync,
{
    let mut scored = guesses
        .par_iter()
        .map(|&word| {
            let scored = ScoredWord {
                word,
                score: score(word, candidates, source)?,
            };
            on_scored(&scored);
            Ok(scored)
        })
        .collect::<Result<Vec<_>, WordleError>>()?;

    // Stable sort: equal scores stay in input order
    scored.sort_by(|a, b| a.score.total_cmp(&b.score));
    Ok(scored)
}
