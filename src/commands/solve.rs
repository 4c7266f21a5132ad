//! Word solving command
//!
//! Plays one session against a given or randomly chosen secret.

use rand::SeedableRng;
use rand::rngs::StdRng;
use regex::Regex;

use crate::core::{Dictionary, Word};
use crate::error::WordleError;
use crate::solver::{Outcome, PatternSource, Session, SessionConfig, StrategyType};

/// Configuration for solving a word
#[derive(Debug, Clone, Default)]
pub struct SolveConfig {
    /// Secret to solve; chosen at random when `None`
    pub target: Option<String>,
    /// Regex a random secret must match
    pub constraint: Option<String>,
    /// Seed for secret selection
    pub seed: Option<u64>,
    pub session: SessionConfig,
}

impl SolveConfig {
    #[must_use]
    pub fn new(target: Option<String>) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub strategy: &'static str,
    pub outcome: Outcome,
}

/// Pick the secret described by `config`
///
/// # Errors
/// - `NoDictionaryMatch` if the target is not a dictionary word, or the
///   constraint matches nothing
/// - `InvalidConstraint` if the constraint is not a valid regex
pub fn pick_target<'d>(
    config: &SolveConfig,
    dictionary: &'d Dictionary,
) -> Result<&'d Word, WordleError> {
    if let Some(target) = &config.target {
        return dictionary
            .find(target)
            .ok_or_else(|| WordleError::NoDictionaryMatch(target.clone()));
    }

    let constraint = config.constraint.as_deref().map(Regex::new).transpose()?;
    let mut rng = config
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    dictionary.choose_secret(constraint.as_ref(), &mut rng)
}

/// Solve a word using the given strategy and pattern source
///
/// # Errors
/// Fails if no target can be picked (see [`pick_target`]) or the session
/// reports an error
pub fn solve_word<P: PatternSource + ?Sized>(
    config: &SolveConfig,
    dictionary: &Dictionary,
    strategy: StrategyType,
    source: &P,
) -> Result<SolveResult, WordleError> {
    let target = pick_target(config, dictionary)?.clone();
    let strategy_name = strategy.name();

    let mut session = Session::new(dictionary, strategy, source, config.session)?
        .with_answer(target.clone())?;
    let outcome = session.run()?;

    Ok(SolveResult {
        target,
        strategy: strategy_name,
        outcome,
    })
}
