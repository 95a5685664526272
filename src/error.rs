// src/error.rs
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(
        "unknown algorithm '{0}' (expected single_thread, multi_thread_1, multi_thread_2 or multi_thread_3)"
    )]
    UnknownAlgorithm(String),

    /// The requested thread count was out of range. The clamped value has
    /// already been applied when this is returned.
    #[error("thread count {requested} is out of range, using {applied} instead")]
    ThreadCountClamped { requested: usize, applied: usize },

    #[error("invalid exclude pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to spawn worker thread")]
    Spawn(#[from] io::Error),

    #[error("a worker thread panicked during analysis")]
    WorkerPanicked,
}
