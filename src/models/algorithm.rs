// src/models/algorithm.rs
use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// How a run splits its workload across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// One thread reads every file and tracks every statistic.
    #[default]
    SingleThread,
    /// Each thread tracks a different statistic over the whole corpus.
    MultiByTask,
    /// Each thread owns a contiguous block of files.
    MultiByFile,
    /// Each thread owns a contiguous, line-aligned byte range of the corpus.
    MultiByChunk,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [
        Self::SingleThread,
        Self::MultiByTask,
        Self::MultiByFile,
        Self::MultiByChunk,
    ];

    pub const NAMES: [&'static str; 4] = [
        "single_thread",
        "multi_thread_1",
        "multi_thread_2",
        "multi_thread_3",
    ];

    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SingleThread => "single_thread",
            Self::MultiByTask => "multi_thread_1",
            Self::MultiByFile => "multi_thread_2",
            Self::MultiByChunk => "multi_thread_3",
        }
    }

    #[inline]
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::SingleThread => "runs every test on a single thread (baseline)",
            Self::MultiByTask => "runs different tests on different threads",
            Self::MultiByFile => "runs different files on different threads",
            Self::MultiByChunk => "runs different chunks of text, possibly from the same file, on different threads",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_multithreaded(self) -> bool {
        !matches!(self, Self::SingleThread)
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == name)
            .ok_or_else(|| EngineError::UnknownAlgorithm(name.to_owned()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
