// src/models/frequency_table.rs
use std::collections::HashMap;
use std::collections::hash_map::Entry as MapEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    count: u64,
    /// Position of the word's first insertion into this table.
    rank: usize,
}

/// Word occurrence counts that remember the order words were first seen in.
///
/// Reads that need a tie-break (see [`FrequencyTable::most_common`]) prefer
/// the word inserted first, so results never depend on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: HashMap<String, Entry>,
}

impl FrequencyTable {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, word: &str) {
        if let Some(entry) = self.entries.get_mut(word) {
            entry.count = entry.count.saturating_add(1);
            return;
        }
        let rank = self.entries.len();
        self.entries.insert(word.to_owned(), Entry { count: 1, rank });
    }

    #[inline]
    #[must_use]
    pub fn count(&self, word: &str) -> u64 {
        self.entries.get(word).map_or(0, |entry| entry.count)
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
    pub fn total(&self) -> u64 {
        self.entries
            .values()
            .fold(0_u64, |sum, entry| sum.saturating_add(entry.count))
    }

    /// Adds `other`'s counts into this table.
    ///
    /// Words already present keep their rank; new words are appended in the
    /// order `other` first saw them. Merging per-worker tables in worker order
    /// therefore yields the same ranks a single sequential pass would.
    pub fn merge(&mut self, other: Self) {
        let mut incoming: Vec<(String, Entry)> = other.entries.into_iter().collect();
        incoming.sort_unstable_by_key(|(_, entry)| entry.rank);

        for (word, entry) in incoming {
            let next_rank = self.entries.len();
            match self.entries.entry(word) {
                MapEntry::Occupied(mut existing) => {
                    let existing = existing.get_mut();
                    existing.count = existing.count.saturating_add(entry.count);
                }
                MapEntry::Vacant(slot) => {
                    slot.insert(Entry {
                        count: entry.count,
                        rank: next_rank,
                    });
                }
            }
        }
    }

    /// The word with the highest count, ties going to the first inserted.
    #[must_use]
    pub fn most_common(&self) -> Option<(&str, u64)> {
        self.entries
            .iter()
            .max_by(|(_, a), (_, b)| a.count.cmp(&b.count).then_with(|| b.rank.cmp(&a.rank)))
            .map(|(word, entry)| (word.as_str(), entry.count))
    }

    /// Words and counts in insertion order.
    #[must_use]
    pub fn in_insertion_order(&self) -> Vec<(&str, u64)> {
        let mut ordered: Vec<(&str, &Entry)> = self
            .entries
            .iter()
            .map(|(word, entry)| (word.as_str(), entry))
            .collect();
        ordered.sort_unstable_by_key(|(_, entry)| entry.rank);
        ordered
            .into_iter()
            .map(|(word, entry)| (word, entry.count))
            .collect()
    }
}
