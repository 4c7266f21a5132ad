//! Word representation
//!
//! A Word stores a lowercase ASCII word together with its letter counts and a
//! packed key used for cache and dictionary lookups.

use std::fmt;

use crate::error::WordleError;

/// Longest word accepted
///
/// Bounded so a word packs into a `u64` key (5 bits per letter) and a pattern
/// fits a `u32` base-3 code.
pub const MAX_WORD_LEN: usize = 12;

const ALPHABET_LEN: usize = 26;

/// A dictionary word, guess or answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    counts: [u8; ALPHABET_LEN],
    key: u64,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is case-insensitive and stored lowercase.
    ///
    /// # Errors
    /// Returns `WordleError` if:
    /// - Length is 0 or greater than [`MAX_WORD_LEN`]
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordleError> {
        let text: String = text.into().to_ascii_lowercase();

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordleError::InvalidCharacters(text));
        }

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordleError::InvalidLength(text.len()));
        }

        let mut counts = [0u8; ALPHABET_LEN];
        let mut key = 0u64;
        for (i, &b) in text.as_bytes().iter().enumerate() {
            let idx = letter_index(b);
            counts[idx] += 1;
            // +1 keeps trailing positions distinguishable from padding
            key |= (idx as u64 + 1) << (5 * i);
        }

        Ok(Self { text, counts, key })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// How many times `letter` occurs in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> u8 {
        if letter.is_ascii_lowercase() {
            self.counts[letter_index(letter)]
        } else {
            0
        }
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.count_of(letter) > 0
    }

    /// Letter counts indexed by `letter - b'a'`
    #[inline]
    pub(crate) const fn letter_counts(&self) -> &[u8; ALPHABET_LEN] {
        &self.counts
    }

    /// Packed key, unique per word
    #[inline]
    #[must_use]
    pub const fn key(&self) -> u64 {
        self.key
    }
}

#[inline]
pub(crate) const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.text(), "crane");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word2, word);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(Word::new(""), Err(WordleError::InvalidLength(0))));
        assert!(matches!(
            Word::new("abcdefghijklm"),
            Err(WordleError::InvalidLength(13))
        ));
    }

    #[test]
    fn word_lengths_other_than_five() {
        assert_eq!(Word::new("cat").unwrap().len(), 3);
        assert_eq!(Word::new("abcdefghijkl").unwrap().len(), MAX_WORD_LEN);
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(WordleError::InvalidCharacters(_))
        ));
        assert!(Word::new("cran ").is_err());
        assert!(Word::new("cran!").is_err());
        assert!(Word::new("crané").is_err());
    }

    #[test]
    fn word_counts() {
        let word = Word::new("speed").unwrap();
        assert_eq!(word.count_of(b'e'), 2);
        assert_eq!(word.count_of(b's'), 1);
        assert_eq!(word.count_of(b'z'), 0);
        assert!(word.has_letter(b'd'));
        assert!(!word.has_letter(b'a'));
    }

    #[test]
    fn keys_distinguish_words() {
        let a = Word::new("cat").unwrap();
        let b = Word::new("cats").unwrap();
        let c = Word::new("act").unwrap();
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(a.key(), Word::new("CAT").unwrap().key());
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
