//! Solving algorithms
//!
//! Filtering, scoring, pattern memoization, guess selection strategies and
//! the session loop that ties them together.

mod cache;
mod filter;
mod scorer;
mod session;
mod source;
pub mod strategy;
mod table;

pub use cache::PatternCache;
pub use filter::{filter, filter_by_answer, filter_history};
pub use scorer::{ScoredWord, rank, rank_with, score};
pub use session::{NGUESSES, Outcome, Round, Session, SessionConfig, Status};
pub use source::{PatternSource, Uncached};
pub use strategy::{
    MinimizeExpectedRemainingStrategy, RandomStrategy, Strategy, StrategyType,
};
pub use table::PatternTable;
