use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Word frequency mapping with insertion order preserved.
///
/// Keys are the surviving noun tokens in order of first occurrence; values are
/// occurrence counts (always ≥ 1). Insertion order is the tie-break for
/// equal-count selection, so it is part of the contract rather than an
/// implementation detail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`, inserting it on first sight.
    pub fn record(&mut self, word: impl Into<String>) {
        *self.counts.entry(word.into()).or_insert(0) += 1;
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    #[must_use]
    pub fn max_count(&self) -> Option<u64> {
        self.counts.values().copied().max()
    }

    /// Selects up to `n` entries by descending count.
    ///
    /// The sort is stable: equal counts keep insertion order (first occurrence
    /// first), so repeated calls select the same entries in the same order.
    #[must_use]
    pub fn top_n(&self, n: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }

    /// Returns the entries with count ≥ `min_count`, insertion order kept.
    #[must_use]
    pub fn filter_min_count(&self, min_count: u64) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .filter(|(_, count)| **count >= min_count)
            .map(|(word, count)| (word.clone(), *count))
            .collect()
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
