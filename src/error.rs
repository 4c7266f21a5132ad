//! Error type shared by the whole crate

use thiserror::Error;

use crate::core::MAX_WORD_LEN;

/// Everything that can go wrong while comparing, filtering, scoring or solving
#[derive(Debug, Error)]
pub enum WordleError {
    /// A word is empty or longer than [`MAX_WORD_LEN`]
    #[error("word must be 1 to {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),

    /// A word contains something other than ASCII letters
    #[error("word '{0}' must contain only ASCII letters")]
    InvalidCharacters(String),

    /// Two things that must line up letter for letter do not
    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A dictionary entry does not have the length of the first entry
    #[error("dictionary word '{word}' has {actual} letters, expected {expected}")]
    InconsistentDictionary {
        word: String,
        expected: usize,
        actual: usize,
    },

    #[error("dictionary contains no words")]
    EmptyDictionary,

    /// No candidate is consistent with the feedback received so far
    #[error("no candidates remain; the feedback history is inconsistent")]
    EmptyCandidateSet,

    /// A secret-selection constraint matched nothing
    #[error("no dictionary word matches `{0}`")]
    NoDictionaryMatch(String),

    /// A secret-selection constraint is not a valid regex
    #[error("invalid secret constraint: {0}")]
    InvalidConstraint(#[from] regex::Error),

    #[error("invalid pattern '{pattern}': {reason}")]
    InvalidPatternEncoding { pattern: String, reason: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("session is already finished")]
    SessionFinished,

    /// A simulated round was requested on a session without a secret answer
    #[error("session has no answer to compare against")]
    NoAnswer,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
