//! Solving session
//!
//! A session owns the candidate set and the guess history of one game. It is
//! driven either by a known answer ([`Session::step`], [`Session::run`]) or by
//! feedback supplied from outside ([`Session::record`]).

use log::{debug, info};

use super::filter::filter;
use super::source::PatternSource;
use super::strategy::Strategy;
use crate::core::{Dictionary, Pattern, Word};
use crate::error::WordleError;

/// Default guess budget
pub const NGUESSES: usize = 6;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Solved,
    Failed,
}

impl Status {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Guesses allowed before the session fails
    pub max_guesses: usize,
}

impl SessionConfig {
    #[must_use]
    pub const fn new(max_guesses: usize) -> Self {
        Self { max_guesses }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(NGUESSES)
    }
}

/// One completed guess
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// 1-based guess number
    pub number: usize,
    pub guess: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Status after this round
    pub status: Status,
}

/// Final result of [`Session::run`]
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub status: Status,
    pub rounds: Vec<Round>,
}

impl Outcome {
    #[must_use]
    pub const fn solved(&self) -> bool {
        matches!(self.status, Status::Solved)
    }

    #[must_use]
    pub fn guesses(&self) -> usize {
        self.rounds.len()
    }
}

/// A single game over a shared dictionary
pub struct Session<'a, S: Strategy, P: PatternSource + ?Sized> {
    dictionary: &'a Dictionary,
    source: &'a P,
    strategy: S,
    config: SessionConfig,
    answer: Option<Word>,
    candidates: Vec<&'a Word>,
    history: Vec<(Word, Pattern)>,
    status: Status,
}

impl<'a, S: Strategy, P: PatternSource + ?Sized> Session<'a, S, P> {
    /// Start a session with every dictionary word as a candidate
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `config.max_guesses` is zero
    pub fn new(
        dictionary: &'a Dictionary,
        strategy: S,
        source: &'a P,
        config: SessionConfig,
    ) -> Result<Self, WordleError> {
        if config.max_guesses == 0 {
            return Err(WordleError::InvalidConfig(
                "max_guesses must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            dictionary,
            source,
            strategy,
            config,
            answer: None,
            candidates: dictionary.refs(),
            history: Vec::new(),
            status: Status::InProgress,
        })
    }

    /// Set the secret answer used by [`Session::step`] and [`Session::run`]
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the answer does not fit the dictionary
    pub fn with_answer(mut self, answer: Word) -> Result<Self, WordleError> {
        check_len(self.dictionary, answer.len())?;
        self.answer = Some(answer);
        Ok(self)
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }

    #[must_use]
    pub fn guesses_made(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.config.max_guesses - self.history.len()
    }

    #[must_use]
    pub const fn answer(&self) -> Option<&Word> {
        self.answer.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }

    /// Ask the strategy for the next guess
    ///
    /// # Errors
    /// - `SessionFinished` once solved or failed
    /// - `EmptyCandidateSet` if nothing is left to choose from
    pub fn suggest(&mut self) -> Result<&'a Word, WordleError> {
        self.ensure_in_progress()?;
        self.strategy
            .select_guess(&self.candidates, self.source)?
            .ok_or(WordleError::EmptyCandidateSet)
    }

    /// Apply the feedback `pattern` received for `guess`
    ///
    /// An all-hit pattern solves the session. Otherwise the candidates are
    /// narrowed, and the session fails once the guess budget is spent.
    ///
    /// # Errors
    /// - `SessionFinished` once solved or failed
    /// - `LengthMismatch` if the guess or pattern does not fit the dictionary
    /// - `EmptyCandidateSet` if no candidate is consistent with the feedback;
    ///   the session is left unchanged so corrected feedback can be recorded
    pub fn record(&mut self, guess: &Word, pattern: Pattern) -> Result<Round, WordleError> {
        self.ensure_in_progress()?;
        check_len(self.dictionary, guess.len())?;
        check_len(self.dictionary, pattern.len())?;

        let candidates_before = self.candidates.len();
        let remaining = filter(guess, pattern, &self.candidates, self.source)?;

        let status = if pattern.is_solved() {
            Status::Solved
        } else if remaining.is_empty() {
            return Err(WordleError::EmptyCandidateSet);
        } else if self.history.len() + 1 >= self.config.max_guesses {
            Status::Failed
        } else {
            Status::InProgress
        };

        self.candidates = remaining;
        self.history.push((guess.clone(), pattern));
        self.status = status;

        let round = Round {
            number: self.history.len(),
            guess: guess.clone(),
            pattern,
            candidates_before,
            candidates_after: self.candidates.len(),
            status,
        };

        debug!(
            "guess {}: {} {} ({} -> {} candidates)",
            round.number, round.guess, round.pattern, candidates_before, round.candidates_after
        );
        match status {
            Status::Solved => info!("solved in {} guesses", round.number),
            Status::Failed => info!("failed after {} guesses", round.number),
            Status::InProgress => {}
        }

        Ok(round)
    }

    /// Play one round against the session's answer
    ///
    /// # Errors
    /// `NoAnswer` without an answer, otherwise as [`Session::suggest`] and
    /// [`Session::record`]
    pub fn step(&mut self) -> Result<Round, WordleError> {
        self.ensure_in_progress()?;
        let guess = self.suggest()?;
        let answer = self.answer.as_ref().ok_or(WordleError::NoAnswer)?;
        let pattern = self.source.pattern(guess, answer)?;
        self.record(guess, pattern)
    }

    /// Play rounds until the session is solved or fails
    ///
    /// # Errors
    /// As [`Session::step`]
    pub fn run(&mut self) -> Result<Outcome, WordleError> {
        if self.answer.is_none() {
            return Err(WordleError::NoAnswer);
        }

        let mut rounds = Vec::with_capacity(self.remaining_guesses());
        while !self.status.is_finished() {
            rounds.push(self.step()?);
        }

        Ok(Outcome {
            status: self.status,
            rounds,
        })
    }

    /// Drop the most recent observation and recompute the candidates
    ///
    /// Returns the removed guess and pattern, if any.
    ///
    /// # Errors
    /// Propagates pattern errors while replaying the remaining history
    pub fn undo(&mut self) -> Result<Option<(Word, Pattern)>, WordleError> {
        let Some(last) = self.history.pop() else {
            return Ok(None);
        };

        let mut candidates = self.dictionary.refs();
        for (guess, pattern) in &self.history {
            candidates = filter(guess, *pattern, &candidates, self.source)?;
        }
        self.candidates = candidates;
        self.status = Status::InProgress;

        Ok(Some(last))
    }

    /// Start over with the full dictionary, keeping strategy and answer
    pub fn reset(&mut self) {
        self.candidates = self.dictionary.refs();
        self.history.clear();
        self.status = Status::InProgress;
    }

    fn ensure_in_progress(&self) -> Result<(), WordleError> {
        if self.status.is_finished() {
            Err(WordleError::SessionFinished)
        } else {
            Ok(())
        }
    }
}

fn check_len(dictionary: &Dictionary, len: usize) -> Result<(), WordleError> {
    if len == dictionary.word_len() {
        Ok(())
    } else {
        Err(WordleError::LengthMismatch {
            expected: dictionary.word_len(),
            actual: len,
        })
    }
}
