// src/models/frequency.rs
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    pub character: char,
    pub count: usize,
}

/// Per-character occurrence counts that remember the order in which each
/// character was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, character: char) {
        if let Some(&position) = self.index.get(&character) {
            if let Some(entry) = self.entries.get_mut(position) {
                entry.count = entry.count.saturating_add(1);
            }
        } else {
            self.index.insert(character, self.entries.len());
            self.entries.push(FrequencyEntry {
                character,
                count: 1,
            });
        }
    }

    pub fn record_str(&mut self, text: &str) {
        for character in text.chars() {
            self.record(character);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, character: char) -> Option<usize> {
        self.index
            .get(&character)
            .and_then(|&position| self.entries.get(position))
            .map(|entry| entry.count)
    }

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

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries
            .iter()
            .fold(0_usize, |sum, entry| sum.saturating_add(entry.count))
    }

    /// Entries in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &FrequencyEntry> {
        self.entries.iter()
    }

    /// Entries by descending count. Ties keep first-appearance order.
    #[must_use]
    pub fn sorted(&self) -> Vec<FrequencyEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}
