//! Letter frequency counting

use serde::Serialize;
use std::collections::BTreeMap;

/// Occurrence counts of the uppercase letters present in a text.
/// Letters that never occur have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyTable {
    counts: BTreeMap<char, usize>,
}

impl FrequencyTable {
    /// Count the ASCII letters of `text`, folding case
    pub fn from_text(text: &str) -> Self {
        let mut counts = BTreeMap::new();
        for c in text.chars().filter(char::is_ascii_alphabetic) {
            *counts.entry(c.to_ascii_uppercase()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for one letter (either case), 0 when absent
    pub fn count(&self, letter: char) -> usize {
        self.counts
            .get(&letter.to_ascii_uppercase())
            .copied()
            .unwrap_or(0)
    }

    /// Number of distinct letters seen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total letters counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&letter, &count)| (letter, count))
    }

    /// Letters by descending count. Equal counts keep alphabetical order.
    pub fn order(&self) -> Vec<char> {
        let mut pairs: Vec<(char, usize)> = self.iter().collect();
        // Stable sort over alphabetical input gives the tie-break
        pairs.sort_by(|a, b| b.1.cmp(&a.1));
        pairs.into_iter().map(|(letter, _)| letter).collect()
    }

    /// The most frequent letter, if any letter was seen
    pub fn most_frequent(&self) -> Option<char> {
        self.order().first().copied()
    }
}

/// Build the frequency table of `text`
pub fn letter_frequencies(text: &str) -> FrequencyTable {
    FrequencyTable::from_text(text)
}

/// Letters of `table` from most to least frequent
pub fn frequency_order(table: &FrequencyTable) -> Vec<char> {
    table.order()
}
