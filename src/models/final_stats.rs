// src/models/final_stats.rs
use std::fmt;

use crate::models::Algorithm;

/// Reported in place of the most common word when no words were found.
pub const NOT_AVAILABLE: &str = "N/A";

/// Corpus-wide statistics produced by one engine run.
#[derive(Debug, Clone, PartialEq)]
pub struct FinalStats {
    pub total_words: u64,
    pub num_unique_words: usize,
    pub most_common_word: String,
    pub most_common_word_occurrences: u64,
    pub longest_word: String,
    pub average_word_length: f64,
    pub processing_time_seconds: f64,
    pub files_processed: u64,
    pub algorithm: Algorithm,
    /// Threads that did work during the run, the calling thread included.
    pub workers: usize,
}

impl Default for FinalStats {
    fn default() -> Self {
        Self {
            total_words: 0,
            num_unique_words: 0,
            most_common_word: NOT_AVAILABLE.to_owned(),
            most_common_word_occurrences: 0,
            longest_word: String::new(),
            average_word_length: 0.0,
            processing_time_seconds: 0.0,
            files_processed: 0,
            algorithm: Algorithm::default(),
            workers: 0,
        }
    }
}

impl fmt::Display for FinalStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<24}{} ({} workers)", "Algorithm:", self.algorithm, self.workers)?;
        writeln!(f, "{:<24}{}", "Files processed:", self.files_processed)?;
        writeln!(f, "{:<24}{}", "Total words:", self.total_words)?;
        writeln!(f, "{:<24}{}", "Unique words:", self.num_unique_words)?;
        writeln!(
            f,
            "{:<24}{} ({} occurrences)",
            "Most common word:", self.most_common_word, self.most_common_word_occurrences
        )?;
        writeln!(f, "{:<24}{}", "Longest word:", self.longest_word)?;
        writeln!(f, "{:<24}{:.2}", "Average word length:", self.average_word_length)?;
        write!(f, "{:<24}{:.3}s", "Processing time:", self.processing_time_seconds)
    }
}
