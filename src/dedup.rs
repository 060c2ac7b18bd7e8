//! Deduplication of accepted words

use ahash::RandomState;
use hashbrown::HashSet;

/// In-memory set of unique words
///
/// Words are kept unordered while filtering and sorted once at the end.
#[derive(Debug, Default)]
pub struct WordSet {
    set: HashSet<String, RandomState>,
}

impl WordSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Add a word, returns true if it was not seen before
    pub fn insert(&mut self, word: String) -> bool {
        self.set.insert(word)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Consume the set, returning its words in ascending order
    pub fn into_sorted_vec(self) -> Vec<String> {
        let mut words: Vec<String> = self.set.into_iter().collect();
        words.sort_unstable();
        words
    }
}
