// src/core/engine.rs
use std::time::Instant;
use tracing::{info, warn};

use crate::config::Config;
use crate::core::corpus::Corpus;
use crate::core::reduce::reduce;
use crate::core::strategy;
use crate::error::EngineError;
use crate::models::{Algorithm, FinalStats};

/// Fewest threads a multithreaded algorithm may use.
pub const MIN_THREADS: usize = 2;

/// Runs the configured algorithm over a corpus.
///
/// Settings persist between runs and only change through the validating
/// setters.
#[derive(Debug, Clone)]
pub struct Engine {
    algorithm: Algorithm,
    thread_count: usize,
    corpus: Corpus,
}

impl Engine {
    #[must_use]
    pub const fn new(corpus: Corpus) -> Self {
        Self {
            algorithm: Algorithm::SingleThread,
            thread_count: MIN_THREADS,
            corpus,
        }
    }

    /// Builds an engine from loaded configuration.
    ///
    /// An unknown algorithm or out-of-range thread count is logged and
    /// handled the way the setters handle it.
    ///
    /// # Errors
    ///
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn from_config(config: &Config) -> Result<Self, EngineError> {
        let mut engine = Self::new(Corpus::new(config.corpus_options())?);

        if let Some(name) = config.algorithm.as_deref() {
            if let Err(err) = engine.set_algorithm(name) {
                warn!(%err, "keeping algorithm {}", engine.algorithm_name());
            }
        }
        if let Some(threads) = config.threads {
            if let Err(err) = engine.set_thread_count(threads) {
                warn!(%err, "adjusted thread count");
            }
        }
        Ok(engine)
    }

    /// Upper bound for [`Engine::set_thread_count`]: the machine's available
    /// parallelism, but never below [`MIN_THREADS`].
    #[inline]
    #[must_use]
    pub fn max_threads() -> usize {
        num_cpus::get().max(MIN_THREADS)
    }

    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    #[must_use]
    pub const fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// # Errors
    ///
    /// Returns [`EngineError::UnknownAlgorithm`] and leaves the current
    /// algorithm in place if `name` is not one of [`Algorithm::NAMES`].
    pub fn set_algorithm(&mut self, name: &str) -> Result<(), EngineError> {
        self.algorithm = name.parse()?;
        Ok(())
    }

    #[inline]
    #[must_use]
    pub const fn thread_count(&self) -> usize {
        self.thread_count
    }

    /// Sets the thread count used by multithreaded algorithms, clamped to
    /// `[MIN_THREADS, Engine::max_threads()]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThreadCountClamped`] if `requested` was out of
    /// range. The clamped value is applied regardless, so an error here does
    /// not mean nothing changed.
    pub fn set_thread_count(&mut self, requested: usize) -> Result<(), EngineError> {
        let applied = requested.clamp(MIN_THREADS, Self::max_threads());
        self.thread_count = applied;
        if applied == requested {
            Ok(())
        } else {
            Err(EngineError::ThreadCountClamped { requested, applied })
        }
    }

    #[inline]
    #[must_use]
    pub const fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Analyzes the corpus with the current settings, blocking until every
    /// worker has finished.
    ///
    /// # Errors
    ///
    /// Returns an error if a worker thread cannot be spawned or panics.
    /// Unreadable files are not errors; they are skipped.
    pub fn run(&self) -> Result<FinalStats, EngineError> {
        let start = Instant::now();
        let files = self.corpus.files();
        info!(
            algorithm = %self.algorithm,
            threads = self.thread_count,
            files = files.len(),
            "starting analysis"
        );

        let partials = match self.algorithm {
            Algorithm::SingleThread => strategy::single_thread(&files),
            Algorithm::MultiByTask => strategy::by_task(&files, self.thread_count)?,
            Algorithm::MultiByFile => strategy::by_file(&files, self.thread_count)?,
            Algorithm::MultiByChunk => strategy::by_chunk(&files, self.thread_count)?,
        };
        let workers = partials.len();

        let mut stats = reduce(partials);
        stats.algorithm = self.algorithm;
        stats.workers = workers;
        stats.processing_time_seconds = start.elapsed().as_secs_f64();

        info!(
            total_words = stats.total_words,
            unique_words = stats.num_unique_words,
            seconds = stats.processing_time_seconds,
            "analysis finished"
        );
        Ok(stats)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Corpus::default())
    }
}
