// src/models/task.rs
use std::fmt;

/// A statistic a worker can be made responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    TotalWords,
    Frequency,
    LongestWord,
    AverageLength,
}

impl Task {
    pub const ALL: [Self; 4] = [
        Self::TotalWords,
        Self::Frequency,
        Self::LongestWord,
        Self::AverageLength,
    ];

    /// Tasks handed to helper threads by the task-split algorithm. The calling
    /// thread keeps `AverageLength` for itself.
    pub const HANDED_OFF: [Self; 3] = [Self::Frequency, Self::LongestWord, Self::TotalWords];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TotalWords => "total_words",
            Self::Frequency => "frequency",
            Self::LongestWord => "longest_word",
            Self::AverageLength => "average_length",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
