//! Dictionary of playable words
//!
//! Loaded once and shared read-only by every session. All words share one
//! length; anything else is rejected at construction.

use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Regex;
use rustc_hash::FxHashMap;

use super::Word;
use crate::error::WordleError;

/// Ordered, validated word list
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    word_len: usize,
    index: FxHashMap<u64, usize>,
}

impl Dictionary {
    /// Build a dictionary from already parsed words
    ///
    /// Order is preserved. Duplicates are kept; lookups resolve to the first
    /// occurrence.
    ///
    /// # Errors
    /// - `EmptyDictionary` if `words` is empty
    /// - `InconsistentDictionary` if a word's length differs from the first
    pub fn new(words: Vec<Word>) -> Result<Self, WordleError> {
        let word_len = words.first().ok_or(WordleError::EmptyDictionary)?.len();

        let mut index = FxHashMap::default();
        index.reserve(words.len());
        for (i, word) in words.iter().enumerate() {
            if word.len() != word_len {
                return Err(WordleError::InconsistentDictionary {
                    word: word.text().to_string(),
                    expected: word_len,
                    actual: word.len(),
                });
            }
            index.entry(word.key()).or_insert(i);
        }

        Ok(Self {
            words,
            word_len,
            index,
        })
    }

    /// Parse whitespace-separated words (normally one per line)
    ///
    /// # Errors
    /// Fails on the first entry that is not a valid word, or per [`Dictionary::new`]
    ///
    /// # Examples
    /// ```
    /// use wordle_narrow::core::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("sight\neight\n Light \n").unwrap();
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.word_len(), 5);
    ///
    /// assert!(Dictionary::parse("sight\nnights\n").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, WordleError> {
        let words = text
            .split_whitespace()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(words)
    }

    /// Load a dictionary file
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, or any [`Dictionary::parse`] error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordleError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Borrow every word, in order, as a fresh candidate set
    #[must_use]
    pub fn refs(&self) -> Vec<&Word> {
        self.words.iter().collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty dictionaries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length shared by every word
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> usize {
        self.word_len
    }

    /// Position of the first occurrence of `word`
    #[inline]
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(&word.key()).copied()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index_of(word).is_some()
    }

    /// Look a word up by text, returning the dictionary's own copy
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        let word = Word::new(text).ok()?;
        self.index_of(&word).map(|i| &self.words[i])
    }

    /// Words whose text contains a match for `constraint`
    #[must_use]
    pub fn matching(&self, constraint: &Regex) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| constraint.is_match(word.text()))
            .collect()
    }

    /// Pick a secret uniformly at random, optionally among words matching
    /// `constraint`
    ///
    /// # Errors
    /// Returns `NoDictionaryMatch` if the constraint matches nothing
    pub fn choose_secret<R: Rng + ?Sized>(
        &self,
        constraint: Option<&Regex>,
        rng: &mut R,
    ) -> Result<&Word, WordleError> {
        let options = match constraint {
            Some(re) => self.matching(re),
            None => self.refs(),
        };

        options.choose(rng).copied().ok_or_else(|| {
            WordleError::NoDictionaryMatch(constraint.map_or_else(String::new, ToString::to_string))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const IGHT: &str = "sight\neight\nlight\nnight\nmight\nbight\n";

    #[test]
    fn parse_keeps_order() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["sight", "eight", "light", "night", "might", "bight"]);
    }

    #[test]
    fn parse_trims_and_normalizes() {
        let dictionary = Dictionary::parse("  Sight\r\n\n\tEIGHT  \n").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.words()[1].text(), "eight");
    }

    #[test]
    fn mixed_lengths_fail_fast() {
        let result = Dictionary::parse("sight\neights\nlight\n");
        assert!(matches!(
            result,
            Err(WordleError::InconsistentDictionary {
                expected: 5,
                actual: 6,
                ..
            })
        ));
    }

    #[test]
    fn empty_dictionary_rejected() {
        assert!(matches!(
            Dictionary::parse("  \n"),
            Err(WordleError::EmptyDictionary)
        ));
    }

    #[test]
    fn invalid_entry_rejected() {
        assert!(matches!(
            Dictionary::parse("sight\nei9ht\n"),
            Err(WordleError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn index_points_at_first_occurrence() {
        let dictionary = Dictionary::parse("sight\neight\nsight\n").unwrap();
        let sight = Word::new("sight").unwrap();
        assert_eq!(dictionary.index_of(&sight), Some(0));
        assert!(dictionary.contains(&Word::new("eight").unwrap()));
        assert!(!dictionary.contains(&Word::new("night").unwrap()));
        assert_eq!(dictionary.find("EIGHT").map(Word::text), Some("eight"));
        assert!(dictionary.find("night").is_none());
    }

    #[test]
    fn matching_is_an_unanchored_search() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let re = Regex::new("^[lm]").unwrap();
        let texts: Vec<&str> = dictionary.matching(&re).into_iter().map(Word::text).collect();
        assert_eq!(texts, ["light", "might"]);

        let re = Regex::new("gh").unwrap();
        assert_eq!(dictionary.matching(&re).len(), 6);
    }

    #[test]
    fn choose_secret_respects_constraint() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let re = Regex::new("^n").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            let secret = dictionary.choose_secret(Some(&re), &mut rng).unwrap();
            assert_eq!(secret.text(), "night");
        }
    }

    #[test]
    fn choose_secret_is_reproducible_with_seed() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let a = dictionary
            .choose_secret(None, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .clone();
        let b = dictionary
            .choose_secret(None, &mut StdRng::seed_from_u64(42))
            .unwrap()
            .clone();
        assert_eq!(a, b);
        assert!(dictionary.contains(&a));
    }

    #[test]
    fn choose_secret_without_match_fails() {
        let dictionary = Dictionary::parse(IGHT).unwrap();
        let re = Regex::new("^z").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            dictionary.choose_secret(Some(&re), &mut rng),
            Err(WordleError::NoDictionaryMatch(ref s)) if s == "^z"
        ));
    }
}
