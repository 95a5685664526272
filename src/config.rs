// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::corpus::CorpusOptions;

pub const CONFIG_FILE_NAME: &str = "wordstat.toml";

/// Settings read from `wordstat.toml`. Every field is optional; missing
/// values fall back to the engine defaults.
///
/// ```toml
/// directory = "Books"
/// algorithm = "multi_thread_2"
/// threads = 4
/// recursive = false
/// exclude = ["*.md", "drafts"]
/// ```
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub directory: Option<PathBuf>,
    pub algorithm: Option<String>,
    pub threads: Option<usize>,
    pub recursive: Option<bool>,
    pub exclude: Vec<String>,
}

impl Config {
    #[must_use]
    pub fn corpus_options(&self) -> CorpusOptions {
        let defaults = CorpusOptions::default();
        CorpusOptions {
            directory: self.directory.clone().unwrap_or(defaults.directory),
            recursive: self.recursive.unwrap_or(defaults.recursive),
            exclude: self.exclude.clone(),
        }
    }
}

/// Searches `dir` and then its ancestors for a config file, returning the
/// first one found.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut visited = HashSet::new();
    let mut current = Some(dir.to_path_buf());

    while let Some(dir) = current {
        if !visited.insert(dir.clone()) {
            break;
        }
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        current = dir.parent().map(Path::to_path_buf);
    }
    None
}

/// Reads and parses one config file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or contains unknown keys
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Loads the nearest config file above `dir`, or the defaults if there is
/// none.
///
/// # Errors
///
/// Returns an error if a config file is found but cannot be loaded.
pub fn discover_config(dir: &Path) -> Result<Config> {
    find_config(dir).map_or_else(|| Ok(Config::default()), |path| load_config(&path))
}
