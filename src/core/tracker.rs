// src/core/tracker.rs
use crate::models::{FrequencyTable, PartialStats, Task};

/// Per-word behaviour of a single [`Task`].
pub trait Tracker: Send {
    fn observe(&mut self, word: &str);

    /// Writes what this tracker gathered into the worker's partial result.
    fn record(self: Box<Self>, stats: &mut PartialStats);
}

#[derive(Debug, Default)]
struct TotalWordsTracker {
    count: u64,
}

impl Tracker for TotalWordsTracker {
    #[inline]
    fn observe(&mut self, _word: &str) {
        self.count = self.count.saturating_add(1);
    }

    fn record(self: Box<Self>, stats: &mut PartialStats) {
        stats.total_words = self.count;
    }
}

#[derive(Debug, Default)]
struct LengthSumTracker {
    sum: u64,
}

impl Tracker for LengthSumTracker {
    #[inline]
    fn observe(&mut self, word: &str) {
        self.sum = self
            .sum
            .saturating_add(u64::try_from(word.len()).unwrap_or(u64::MAX));
    }

    fn record(self: Box<Self>, stats: &mut PartialStats) {
        stats.length_sum = self.sum;
    }
}

#[derive(Debug, Default)]
struct LongestWordTracker {
    longest: String,
}

impl Tracker for LongestWordTracker {
    #[inline]
    fn observe(&mut self, word: &str) {
        // Strictly longer only: the first word of a given length stays.
        if word.len() > self.longest.len() {
            word.clone_into(&mut self.longest);
        }
    }

    fn record(self: Box<Self>, stats: &mut PartialStats) {
        stats.longest_word = self.longest;
    }
}

#[derive(Debug, Default)]
struct FrequencyTracker {
    table: FrequencyTable,
}

impl Tracker for FrequencyTracker {
    #[inline]
    fn observe(&mut self, word: &str) {
        self.table.increment(word);
    }

    fn record(self: Box<Self>, stats: &mut PartialStats) {
        stats.frequencies = self.table;
    }
}

/// Builds the tracker that carries out `task`.
#[must_use]
pub fn tracker_for(task: Task) -> Box<dyn Tracker> {
    match task {
        Task::TotalWords => Box::<TotalWordsTracker>::default(),
        Task::Frequency => Box::<FrequencyTracker>::default(),
        Task::LongestWord => Box::<LongestWordTracker>::default(),
        Task::AverageLength => Box::<LengthSumTracker>::default(),
    }
}
