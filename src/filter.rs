//! Word filtering module
//!
//! Decides which dictionary lines make it into the word list: a word must have
//! the configured length and be spelled only with allowed characters.

use ahash::RandomState;
use hashbrown::HashSet;

/// Length of the words kept by default
pub const WORD_LENGTH: usize = 5;

/// Immutable set of characters a word may be spelled with
#[derive(Debug, Clone)]
pub struct Charset {
    chars: HashSet<char, RandomState>,
}

impl Charset {
    /// ASCII letters in both cases
    pub fn ascii_letters() -> Self {
        let chars = ('a'..='z').chain('A'..='Z').collect();
        Self { chars }
    }

    /// ASCII letters plus the given extra characters
    pub fn with_extra(extra: &[char]) -> Self {
        let mut charset = Self::ascii_letters();
        charset.chars.extend(extra.iter().copied());
        charset
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Check that every character of `word` is in the set
    #[inline]
    pub fn contains_all(&self, word: &str) -> bool {
        word.chars().all(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// Why a candidate word was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Length,
    Charset,
}

/// Length + charset filter
#[derive(Debug, Clone)]
pub struct WordFilter {
    length: usize,
    charset: Charset,
}

impl WordFilter {
    pub fn new(length: usize, charset: Charset) -> Self {
        Self { length, charset }
    }

    /// Turn a raw dictionary line into a candidate word
    #[inline]
    pub fn normalize(&self, line: &str) -> String {
        line.to_lowercase()
    }

    /// Check if a candidate word qualifies
    #[inline]
    pub fn accepts(&self, word: &str) -> bool {
        self.check(word).is_ok()
    }

    /// Like [`accepts`](Self::accepts), but reports which test failed
    pub fn check(&self, word: &str) -> Result<(), Rejection> {
        // Fast byte-length check first for ASCII words
        let word_len = if word.is_ascii() {
            word.len()
        } else {
            word.chars().count()
        };

        if word_len != self.length {
            return Err(Rejection::Length);
        }

        if !self.charset.contains_all(word) {
            return Err(Rejection::Charset);
        }

        Ok(())
    }
}
