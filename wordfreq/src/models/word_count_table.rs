// src/models/word_count_table.rs
use std::collections::HashMap;

use crate::models::WordCount;

/// Occurrence counts keyed by normalized word.
///
/// Entries are kept in the order each word was first seen, so that sorting
/// by count with a stable sort yields the same tie order on every run.
#[derive(Debug, Default, Clone)]
pub struct WordCountTable {
    index: HashMap<String, usize>,
    entries: Vec<WordCount>,
}

impl WordCountTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`, inserting it with a count of 1 on first sight.
    pub fn increment(&mut self, word: &str) {
        if let Some(&slot) = self.index.get(word) {
            if let Some(entry) = self.entries.get_mut(slot) {
                entry.count = entry.count.saturating_add(1);
            }
            return;
        }
        self.index.insert(word.to_owned(), self.entries.len());
        self.entries.push(WordCount::new(word, 1));
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.index
            .get(word)
            .and_then(|&slot| self.entries.get(slot))
            .map(|entry| entry.count)
    }

    /// Number of distinct words.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens that were recorded.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |acc, entry| acc.saturating_add(entry.count))
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<WordCount> {
        self.entries
    }
}
