//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for every letter of a guess using base-3:
//! - 0 = Miss (`_`)
//! - 1 = Present (`*`)
//! - 2 = Hit (`#`)
//!
//! Position `i` contributes `digit × 3^i` to the code. The code together with
//! the word length identifies a pattern.

use std::fmt;

use super::word::{MAX_WORD_LEN, Word, letter_index};
use crate::error::WordleError;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Miss = 0,
    Present = 1,
    Hit = 2,
}

impl Feedback {
    /// Text symbol used in the pattern encoding
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Miss => '_',
            Self::Present => '*',
            Self::Hit => '#',
        }
    }

    /// Inverse of [`Feedback::symbol`]
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Self::Miss),
            '*' => Some(Self::Present),
            '#' => Some(Self::Hit),
            _ => None,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Hit,
            1 => Self::Present,
            _ => Self::Miss,
        }
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

impl Pattern {
    /// Pattern where every letter is a hit
    ///
    /// # Panics
    /// Panics in debug mode if `len` is 0 or exceeds [`MAX_WORD_LEN`]
    #[must_use]
    pub const fn all_hit(len: usize) -> Self {
        debug_assert!(len > 0 && len <= MAX_WORD_LEN);
        Self {
            code: 3u32.pow(len as u32) - 1,
            len: len as u8,
        }
    }

    /// Rebuild a pattern from a raw code and length
    pub(crate) const fn from_code(code: u32, len: usize) -> Self {
        Self {
            code,
            len: len as u8,
        }
    }

    /// Build a pattern from per-letter feedback
    ///
    /// # Errors
    /// Returns `InvalidPatternEncoding` if `feedback` is empty or longer than
    /// [`MAX_WORD_LEN`]
    pub fn from_feedback(feedback: &[Feedback]) -> Result<Self, WordleError> {
        if feedback.is_empty() || feedback.len() > MAX_WORD_LEN {
            return Err(WordleError::InvalidPatternEncoding {
                pattern: feedback.iter().map(|f| f.symbol()).collect(),
                reason: format!("length must be 1 to {MAX_WORD_LEN}"),
            });
        }

        let mut code = 0u32;
        let mut place = 1u32;
        for &f in feedback {
            code += f as u32 * place;
            place *= 3;
        }

        Ok(Self::from_code(code, feedback.len()))
    }

    /// Get the raw base-3 code
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.code
    }

    /// Number of letters covered
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false; a pattern covers at least one letter
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Check if every letter is a hit, i.e. the guess was the answer
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.code == Self::all_hit(self.len as usize).code
    }

    /// Feedback at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn feedback_at(self, position: usize) -> Feedback {
        assert!(position < self.len(), "position {position} out of range");
        Feedback::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Iterate over per-letter feedback, left to right
    pub fn iter(self) -> impl Iterator<Item = Feedback> {
        let mut rest = self.code;
        (0..self.len()).map(move |_| {
            let digit = rest % 3;
            rest /= 3;
            Feedback::from_digit(digit)
        })
    }

    /// Count letters with the given feedback
    #[must_use]
    pub fn count(self, feedback: Feedback) -> usize {
        self.iter().filter(|&f| f == feedback).count()
    }

    /// Calculate the pattern when `guess` is played against `answer`
    ///
    /// # Algorithm
    /// Scanning left to right, a letter is a hit when it matches the answer
    /// at that position. Otherwise it is present when the number of times the
    /// letter has occurred in the guess so far (this position included) does
    /// not exceed its count in the answer. Hits count toward that running
    /// total, so surplus duplicates are misses.
    ///
    /// # Errors
    /// Returns `LengthMismatch` if the words differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::{Pattern, Word};
    ///
    /// let guess = Word::new("cocoa").unwrap();
    /// let answer = Word::new("coach").unwrap();
    /// let pattern = Pattern::calculate(&guess, &answer).unwrap();
    /// assert_eq!(pattern.to_string(), "##*_*");
    /// ```
    pub fn calculate(guess: &Word, answer: &Word) -> Result<Self, WordleError> {
        if guess.len() != answer.len() {
            return Err(WordleError::LengthMismatch {
                expected: guess.len(),
                actual: answer.len(),
            });
        }
        Ok(Self::calculate_unchecked(guess, answer))
    }

    /// [`Pattern::calculate`] for words already known to share a length
    pub(crate) fn calculate_unchecked(guess: &Word, answer: &Word) -> Self {
        let answer_counts = answer.letter_counts();
        let mut seen = [0u8; 26];
        let mut code = 0u32;
        let mut place = 1u32;

        for (&g, &a) in guess.bytes().iter().zip(answer.bytes()) {
            let idx = letter_index(g);
            seen[idx] += 1;

            let feedback = if g == a {
                Feedback::Hit
            } else if seen[idx] <= answer_counts[idx] {
                // seen[idx] >= 1 here, so the letter occurs in the answer
                Feedback::Present
            } else {
                Feedback::Miss
            };

            code += feedback as u32 * place;
            place *= 3;
        }

        Self::from_code(code, guess.len())
    }

    /// Parse a pattern and check it covers exactly `expected_len` letters
    ///
    /// # Errors
    /// Returns `InvalidPatternEncoding` on a bad symbol or wrong length
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Pattern;
    ///
    /// assert!(Pattern::parse("_**#_", 5).is_ok());
    /// assert!(Pattern::parse("_**#", 5).is_err());
    /// ```
    pub fn parse(text: &str, expected_len: usize) -> Result<Self, WordleError> {
        let pattern: Self = text.parse()?;
        if pattern.len() != expected_len {
            return Err(WordleError::InvalidPatternEncoding {
                pattern: text.to_string(),
                reason: format!("expected {expected_len} symbols, got {}", pattern.len()),
            });
        }
        Ok(pattern)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in self.iter() {
            write!(f, "{}", feedback.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let feedback = s
            .chars()
            .map(|ch| {
                Feedback::from_symbol(ch).ok_or_else(|| WordleError::InvalidPatternEncoding {
                    pattern: s.to_string(),
                    reason: format!("'{ch}' is not one of '_', '*', '#'"),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_feedback(&feedback).map_err(|_| WordleError::InvalidPatternEncoding {
            pattern: s.to_string(),
            reason: format!("length must be 1 to {MAX_WORD_LEN}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compare(guess: &str, answer: &str) -> String {
        let guess = Word::new(guess).unwrap();
        let answer = Word::new(answer).unwrap();
        Pattern::calculate(&guess, &answer).unwrap().to_string()
    }

    #[test]
    fn reference_duplicate_letter_examples() {
        assert_eq!(compare("relic", "lyric"), "*_*##");
        assert_eq!(compare("cocoa", "coach"), "##*_*");
    }

    #[test]
    fn all_miss() {
        assert_eq!(compare("abcde", "fghij"), "_____");
    }

    #[test]
    fn identity_is_all_hit() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa", "cat", "abcdefghijkl"] {
            let w = Word::new(word).unwrap();
            let pattern = Pattern::calculate(&w, &w).unwrap();
            assert!(pattern.is_solved());
            assert_eq!(pattern, Pattern::all_hit(w.len()));
            assert_eq!(pattern.to_string(), "#".repeat(w.len()));
        }
    }

    #[test]
    fn surplus_duplicates_are_misses() {
        // Only one e in "eight": the first e is present, the second is not
        assert_eq!(compare("sleep", "eight"), "__*__");
        // Two e's in "erase": both count
        assert_eq!(compare("speed", "erase"), "*_**_");
    }

    #[test]
    fn hits_consume_the_running_count() {
        // The leading hit on 'l' uses up the only 'l', so the later one misses
        assert_eq!(compare("lolly", "lapse"), "#____");
        // A hit after an earlier occurrence does not retroactively change it
        assert_eq!(compare("robot", "floor"), "**_#_");
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("cranes").unwrap();
        assert!(matches!(
            Pattern::calculate(&guess, &answer),
            Err(WordleError::LengthMismatch {
                expected: 5,
                actual: 6
            })
        ));
    }

    #[test]
    fn encoding_values() {
        let pattern: Pattern = "#*_##".parse().unwrap();
        // 2 + 1×3 + 0×9 + 2×27 + 2×81 = 221
        assert_eq!(pattern.value(), 221);
        assert_eq!(pattern.len(), 5);
        assert_eq!(pattern.count(Feedback::Hit), 3);
        assert_eq!(pattern.count(Feedback::Present), 1);
        assert_eq!(pattern.feedback_at(2), Feedback::Miss);
        assert!(!pattern.is_solved());
        assert_eq!(Pattern::all_hit(5).value(), 242);
    }

    #[test]
    fn text_roundtrip_preserves_symbols() {
        for text in ["_____", "#####", "*_*##", "#"] {
            assert_eq!(text.parse::<Pattern>().unwrap().to_string(), text);
        }
    }

    #[test]
    fn parse_rejects_bad_symbols_and_lengths() {
        assert!(matches!(
            "GY-GY".parse::<Pattern>(),
            Err(WordleError::InvalidPatternEncoding { .. })
        ));
        assert!("".parse::<Pattern>().is_err());
        assert!("_____________".parse::<Pattern>().is_err());
        assert!(Pattern::parse("___", 5).is_err());
        assert!(Pattern::parse("______", 5).is_err());
        assert_eq!(Pattern::parse("__*__", 5).unwrap().to_string(), "__*__");
    }

    #[test]
    fn from_feedback_matches_parse() {
        let built = Pattern::from_feedback(&[
            Feedback::Present,
            Feedback::Miss,
            Feedback::Present,
            Feedback::Hit,
            Feedback::Hit,
        ])
        .unwrap();
        assert_eq!(built, "*_*##".parse().unwrap());
        assert!(Pattern::from_feedback(&[]).is_err());
    }

    #[test]
    fn patterns_of_different_lengths_differ() {
        let short: Pattern = "___".parse().unwrap();
        let long: Pattern = "_____".parse().unwrap();
        assert_eq!(short.value(), long.value());
        assert_ne!(short, long);
    }
}
