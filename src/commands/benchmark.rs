//! Benchmark command
//!
//! Plays one session per answer, sessions in parallel over a shared
//! dictionary and pattern source.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use crate::core::{Dictionary, Word};
use crate::error::WordleError;
use crate::solver::{Outcome, PatternSource, Session, SessionConfig, StrategyType};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Guesses summed over solved sessions
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved sessions by number of guesses
    pub distribution: HashMap<usize, usize>,
    /// Answers that were not solved within the budget
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a session for each answer
///
/// `make_strategy` receives the answer's position so random strategies can
/// be seeded per session.
///
/// # Errors
/// Propagates the first session error
pub fn run_benchmark<P, F>(
    dictionary: &Dictionary,
    answers: &[&Word],
    make_strategy: F,
    source: &P,
    config: SessionConfig,
    show_progress: bool,
) -> Result<BenchmarkResult, WordleError>
where
    P: PatternSource + ?Sized,
    F: Fn(usize) -> StrategyType + Sync,
{
    let start = Instant::now();

    let pb = if show_progress {
        let pb = ProgressBar::new(answers.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes = answers
        .par_iter()
        .enumerate()
        .map(|(i, &answer)| {
            let mut session = Session::new(dictionary, make_strategy(i), source, config)?
                .with_answer(answer.clone())?;
            let outcome = session.run();
            pb.inc(1);
            outcome.map(|o| (answer, o))
        })
        .collect::<Result<Vec<(&Word, Outcome)>, WordleError>>()?;

    pb.finish_and_clear();
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failures = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for (answer, outcome) in &outcomes {
        if outcome.solved() {
            let guesses = outcome.guesses();
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(answer.text().to_string());
        }
    }

    let total_words = outcomes.len();
    let solved = total_words - failures.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed: failures.len(),
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
