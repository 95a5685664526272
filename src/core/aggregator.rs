// src/core/aggregator.rs
use crate::core::tokenizer::words;
use crate::core::tracker::{Tracker, tracker_for};
use crate::models::{PartialStats, Task};

/// Accumulates statistics for one worker.
///
/// Owned by exactly one thread for the whole parallel phase, so no
/// synchronization is involved; the result leaves the thread through
/// [`PartialAggregator::finish`].
pub struct PartialAggregator {
    tasks: Vec<Task>,
    trackers: Vec<Box<dyn Tracker>>,
    files_read: u64,
}

impl PartialAggregator {
    #[must_use]
    pub fn new(tasks: &[Task]) -> Self {
        let mut unique: Vec<Task> = Vec::with_capacity(tasks.len());
        for task in tasks {
            if !unique.contains(task) {
                unique.push(*task);
            }
        }
        let trackers = unique.iter().copied().map(tracker_for).collect();
        Self {
            tasks: unique,
            trackers,
            files_read: 0,
        }
    }

    #[inline]
    pub fn observe(&mut self, word: &str) {
        for tracker in &mut self.trackers {
            tracker.observe(word);
        }
    }

    #[inline]
    pub fn observe_line(&mut self, line: &str) {
        for word in words(line) {
            self.observe(word);
        }
    }

    #[inline]
    pub fn file_opened(&mut self) {
        self.files_read = self.files_read.saturating_add(1);
    }

    #[must_use]
    pub fn finish(self) -> PartialStats {
        let mut stats = PartialStats::new(&self.tasks);
        stats.files_read = self.files_read;
        for tracker in self.trackers {
            tracker.record(&mut stats);
        }
        stats
    }
}

impl std::fmt::Debug for PartialAggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartialAggregator")
            .field("tasks", &self.tasks)
            .field("files_read", &self.files_read)
            .finish_non_exhaustive()
    }
}
