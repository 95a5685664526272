//! Corpus-wide word statistics computed by interchangeable parallel
//! algorithms.
//!
//! An [`Engine`] lists the files of a directory, splits the reading across
//! worker threads according to its [`Algorithm`], merges the per-worker
//! results and reports the totals as [`FinalStats`].
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod utils;

pub use crate::cli::{Args, run};
pub use crate::config::{Config, discover_config, load_config};
pub use crate::core::corpus::{Corpus, CorpusOptions, DEFAULT_CORPUS_DIR};
pub use crate::core::engine::{Engine, MIN_THREADS};
pub use crate::core::tokenizer::words;
pub use crate::error::EngineError;
pub use crate::models::{Algorithm, FinalStats, FrequencyTable, NOT_AVAILABLE, PartialStats, Task};
