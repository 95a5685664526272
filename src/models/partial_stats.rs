// src/models/partial_stats.rs
use crate::models::{FrequencyTable, Task};

/// Statistics gathered by one worker over the input it was assigned.
///
/// Only the fields belonging to `tasks` are meaningful; the rest keep their
/// default values and are ignored when partials are reduced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PartialStats {
    pub tasks: Vec<Task>,
    pub files_read: u64,
    pub total_words: u64,
    pub length_sum: u64,
    pub longest_word: String,
    pub frequencies: FrequencyTable,
}

impl PartialStats {
    #[inline]
    #[must_use]
    pub fn new(tasks: &[Task]) -> Self {
        Self {
            tasks: tasks.to_vec(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn covers(&self, task: Task) -> bool {
        self.tasks.contains(&task)
    }
}
