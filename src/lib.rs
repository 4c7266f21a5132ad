//! Wordle Narrow
//!
//! A Wordle solver core: feedback patterns with the duplicate-letter rule,
//! candidate filtering, mean-remaining guess scoring, pattern memoization and
//! a solving loop with pluggable guess strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_narrow::core::{Dictionary, Pattern, Word};
//! use wordle_narrow::solver::{PatternCache, filter, score};
//!
//! let dictionary = Dictionary::parse("sight eight light night might bight").unwrap();
//! let cache = PatternCache::new();
//!
//! // Feedback for a guess
//! let guess = Word::new("sleep").unwrap();
//! let pattern = Pattern::calculate(&guess, &Word::new("eight").unwrap()).unwrap();
//! assert_eq!(pattern.to_string(), "__*__");
//!
//! // Narrow the candidates with it
//! let remaining = filter(&guess, pattern, &dictionary.refs(), &cache).unwrap();
//! assert_eq!(remaining.len(), 1);
//!
//! // Mean number of candidates left after guessing
//! let expected = score(&guess, &dictionary.refs(), &cache).unwrap();
//! assert_eq!(expected, 2.0);
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::WordleError;
