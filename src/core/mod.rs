//! Core domain types
//!
//! Words, feedback patterns and the dictionary. Everything here is pure and
//! independent of how guesses are chosen.

mod dictionary;
mod pattern;
mod word;

pub use dictionary::Dictionary;
pub use pattern::{Feedback, Pattern};
pub use word::{MAX_WORD_LEN, Word};
