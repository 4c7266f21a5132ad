//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;

use super::scorer::score;
use super::source::PatternSource;
use crate::core::Word;
use crate::error::WordleError;

/// A strategy for picking the next guess from the current candidates
pub trait Strategy {
    /// Select a guess from `candidates`
    ///
    /// Returns `None` if there are no candidates.
    ///
    /// # Errors
    /// Propagates pattern errors from `source`
    fn select_guess<'a, P: PatternSource + ?Sized>(
        &mut self,
        candidates: &[&'a Word],
        source: &P,
    ) -> Result<Option<&'a Word>, WordleError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug)]
pub enum StrategyType {
    /// Uniform random choice among candidates
    Random(RandomStrategy),
    /// Candidate with the lowest mean-remaining score
    MinimizeExpectedRemaining(MinimizeExpectedRemainingStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a, P: PatternSource + ?Sized>(
        &mut self,
        candidates: &[&'a Word],
        source: &P,
    ) -> Result<Option<&'a Word>, WordleError> {
        match self {
            Self::Random(s) => s.select_guess(candidates, source),
            Self::MinimizeExpectedRemaining(s) => s.select_guess(candidates, source),
        }
    }
}

impl StrategyType {
    /// Random strategy, reproducible when `seed` is given
    #[must_use]
    pub fn random(seed: Option<u64>) -> Self {
        Self::Random(RandomStrategy::new(seed))
    }

    #[must_use]
    pub const fn minimize() -> Self {
        Self::MinimizeExpectedRemaining(MinimizeExpectedRemainingStrategy)
    }

    /// Short name used on the command line and in logs
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Random(_) => "random",
            Self::MinimizeExpectedRemaining(_) => "minimize",
        }
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    /// Seeded when `seed` is given, otherwise seeded from the OS
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { rng }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a, P: PatternSource + ?Sized>(
        &mut self,
        candidates: &[&'a Word],
        _source: &P,
    ) -> Result<Option<&'a Word>, WordleError> {
        Ok(candidates.choose(&mut self.rng).copied())
    }
}

/// Minimize expected remaining candidates
///
/// Scores every candidate against the candidate set and keeps the lowest.
/// Ties go to the candidate listed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimizeExpectedRemainingStrategy;

impl Strategy for MinimizeExpectedRemainingStrategy {
    fn select_guess<'a, P: PatternSource + ?Sized>(
        &mut self,
        candidates: &[&'a Word],
        source: &P,
    ) -> Result<Option<&'a Word>, WordleError> {
        if candidates.len() <= 1 {
            return Ok(candidates.first().copied());
        }

        let scored = candidates
            .par_iter()
            .enumerate()
            .map(|(i, &word)| score(word, candidates, source).map(|s| (i, s)))
            .collect::<Result<Vec<_>, WordleError>>()?;

        let best = scored
            .into_iter()
            .min_by(|(i, a), (j, b)| a.total_cmp(b).then(i.cmp(j)))
            .map(|(i, _)| candidates[i]);

        Ok(best)
    }
}
