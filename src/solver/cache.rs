//! Bounded pattern cache
//!
//! Keys are the packed `(guess, answer)` word keys. Entries are kept in least
//! recently used order and the oldest is evicted once the cache is full, so
//! memory stays bounded even when a caller (ranking, for instance) touches
//! every pair of a large dictionary exactly once. The cache sits behind a
//! mutex so one instance can be shared by sessions on different threads.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use lru::LruCache;
use rustc_hash::FxBuildHasher;

use super::source::PatternSource;
use crate::core::{Pattern, Word};
use crate::error::WordleError;

/// Capacity used by [`PatternCache::new`]
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 16;

type Entries = LruCache<(u64, u64), Pattern, FxBuildHasher>;

/// Memoizes [`Pattern::calculate`] by word pair, evicting least recently
/// used pairs
#[derive(Debug)]
pub struct PatternCache {
    entries: Mutex<Entries>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl PatternCache {
    /// Cache holding up to [`DEFAULT_CACHE_CAPACITY`] pairs
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Cache holding at most `capacity` pairs, normally the dictionary length
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Mutex::new(LruCache::with_hasher(capacity, FxBuildHasher)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    // A panic while holding the lock cannot leave a half-written entry
    fn lock(&self) -> MutexGuard<'_, Entries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of cached pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Most pairs kept at once
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Lookups answered from the cache
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that had to compute the pattern
    #[must_use]
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.lock().clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSource for PatternCache {
    fn pattern(&self, guess: &Word, answer: &Word) -> Result<Pattern, WordleError> {
        let key = (guess.key(), answer.key());

        let cached = self.lock().get(&key).copied();
        if let Some(pattern) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(pattern);
        }

        // Computed outside the lock; errors are returned before anything is inserted
        let pattern = Pattern::calculate(guess, answer)?;
        self.misses.fetch_add(1, Ordering::Relaxed);

        // Another thread may have raced us here; either value is identical
        self.lock().put(key, pattern);
        Ok(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::solver::rank;
    use rayon::prelude::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn cached_patterns_match_calculate() {
        let cache = PatternCache::new();
        let list = words(&["relic", "lyric", "cocoa", "coach", "sleep", "eight"]);

        for guess in &list {
            for answer in &list {
                let expected = Pattern::calculate(guess, answer).unwrap();
                assert_eq!(cache.pattern(guess, answer).unwrap(), expected);
                assert_eq!(cache.pattern(guess, answer).unwrap(), expected);
            }
        }

        assert_eq!(cache.len(), list.len() * list.len());
        assert_eq!(cache.misses(), list.len() * list.len());
        assert_eq!(cache.hits(), list.len() * list.len());
    }

    #[test]
    fn order_of_pair_matters() {
        let cache = PatternCache::with_capacity(4);
        let speed = Word::new("speed").unwrap();
        let erase = Word::new("erase").unwrap();

        assert_eq!(cache.pattern(&speed, &erase).unwrap().to_string(), "*_**_");
        assert_eq!(cache.pattern(&erase, &speed).unwrap().to_string(), "*__**");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn errors_are_not_cached() {
        let cache = PatternCache::new();
        let short = Word::new("cat").unwrap();
        let long = Word::new("crane").unwrap();

        assert!(matches!(
            cache.pattern(&short, &long),
            Err(WordleError::LengthMismatch { .. })
        ));
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let cache = PatternCache::new();
        let list = words(&["sight", "eight", "light", "night", "might", "bight"]);

        let all_solved = list
            .par_iter()
            .all(|w| cache.pattern(w, w).is_ok_and(Pattern::is_solved));

        assert!(all_solved);
        assert_eq!(cache.len(), list.len());
    }

    #[test]
    fn clear_resets_everything() {
        let cache = PatternCache::new();
        let word = Word::new("crane").unwrap();
        cache.pattern(&word, &word).unwrap();
        cache.pattern(&word, &word).unwrap();

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.hits(), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn least_recently_used_pair_is_evicted() {
        let cache = PatternCache::with_capacity(2);
        let speed = Word::new("speed").unwrap();
        let erase = Word::new("erase").unwrap();

        cache.pattern(&speed, &erase).unwrap();
        cache.pattern(&erase, &speed).unwrap();
        // touch the first pair so the second becomes the oldest
        cache.pattern(&speed, &erase).unwrap();
        cache.pattern(&speed, &speed).unwrap();

        assert_eq!(cache.len(), 2);
        assert_eq!((cache.hits(), cache.misses()), (1, 3));

        cache.pattern(&speed, &erase).unwrap();
        assert_eq!(cache.hits(), 2);
        cache.pattern(&erase, &speed).unwrap();
        assert_eq!(cache.misses(), 4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn full_ranking_stays_within_capacity() {
        let dictionary = Dictionary::parse(
            "sight eight light night might bight wight fight tight mewls sleep crane",
        )
        .unwrap();
        let all = dictionary.refs();
        let cache = PatternCache::with_capacity(dictionary.len());

        let ranked = rank(&all, &all, &cache).unwrap();

        assert_eq!(ranked.len(), all.len());
        assert_eq!(cache.capacity(), dictionary.len());
        assert_eq!(cache.len(), dictionary.len());
        assert_eq!(cache.hits() + cache.misses(), all.len() * all.len());
    }

    #[test]
    fn zero_capacity_holds_one_pair() {
        let cache = PatternCache::with_capacity(0);
        let word = Word::new("crane").unwrap();
        cache.pattern(&word, &word).unwrap();
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
    }
}
