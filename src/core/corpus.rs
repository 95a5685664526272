// src/core/corpus.rs
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::EngineError;
use crate::utils::{absolute_path, is_hidden};

/// Directory analyzed when nothing else is configured, relative to the
/// working directory.
pub const DEFAULT_CORPUS_DIR: &str = "Books";

/// Where the input files live and which of them to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusOptions {
    pub directory: PathBuf,
    pub recursive: bool,
    /// Glob patterns matched against entry names and root-relative paths.
    pub exclude: Vec<String>,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_CORPUS_DIR),
            recursive: false,
            exclude: Vec::new(),
        }
    }
}

/// A validated [`CorpusOptions`] that can list its files.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    options: CorpusOptions,
    exclude: Vec<Pattern>,
}

impl Corpus {
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPattern`] if an exclude pattern is not a
    /// valid glob.
    pub fn new(options: CorpusOptions) -> Result<Self, EngineError> {
        let exclude = options
            .exclude
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| EngineError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { options, exclude })
    }

    #[inline]
    #[must_use]
    pub const fn options(&self) -> &CorpusOptions {
        &self.options
    }

    /// Lists the corpus files sorted by path.
    ///
    /// Hidden and excluded entries are skipped, as are entries that cannot
    /// be read. A missing directory is an empty corpus.
    #[must_use]
    pub fn files(&self) -> Vec<PathBuf> {
        let root = absolute_path(&self.options.directory);
        if !root.is_dir() {
            warn!(directory = %root.display(), "corpus directory not found, nothing to analyze");
            return Vec::new();
        }

        let max_depth = if self.options.recursive { usize::MAX } else { 1 };
        let mut files = Vec::new();

        for entry in WalkDir::new(&root)
            .min_depth(1)
            .max_depth(max_depth)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !self.should_skip(&root, e))
        {
            match entry {
                Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
                Ok(_) => {}
                Err(err) => warn!(error = %err, "skipping unreadable corpus entry"),
            }
        }

        debug!(directory = %root.display(), files = files.len(), "listed corpus");
        files
    }

    fn should_skip(&self, root: &Path, entry: &DirEntry) -> bool {
        if is_hidden(entry) {
            return true;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
        let name = entry.file_name().to_string_lossy();
        self.exclude
            .iter()
            .any(|pattern| pattern.matches(&name) || pattern.matches_path(relative))
    }
}
