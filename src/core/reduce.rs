// src/core/reduce.rs
use crate::models::{FinalStats, FrequencyTable, NOT_AVAILABLE, PartialStats, Task};

/// Merges worker results, given in worker order, into the final statistics.
///
/// Each statistic is merged only across the partials whose worker was tasked
/// with it. Workers that split the input (by file or chunk) all carry every
/// task and are summed; workers that split the tasks each carry one slice of
/// the statistics, which is then taken as is. Either way no word is counted
/// twice.
///
/// Timing, algorithm and worker count are left for the caller to fill in.
#[must_use]
pub fn reduce(partials: Vec<PartialStats>) -> FinalStats {
    let mut total_words: u64 = 0;
    let mut length_sum: u64 = 0;
    let mut files_processed: u64 = 0;
    let mut longest_word = String::new();
    let mut frequencies = FrequencyTable::new();

    for partial in partials {
        let PartialStats {
            tasks,
            files_read,
            total_words: words,
            length_sum: lengths,
            longest_word: candidate,
            frequencies: table,
        } = partial;

        if tasks.contains(&Task::TotalWords) {
            total_words = total_words.saturating_add(words);
            files_processed = files_processed.saturating_add(files_read);
        }
        if tasks.contains(&Task::AverageLength) {
            length_sum = length_sum.saturating_add(lengths);
        }
        // Earlier workers saw their words first, so they keep ties.
        if tasks.contains(&Task::LongestWord) && candidate.len() > longest_word.len() {
            longest_word = candidate;
        }
        if tasks.contains(&Task::Frequency) {
            frequencies.merge(table);
        }
    }

    let (most_common_word, most_common_word_occurrences) = frequencies
        .most_common()
        .map_or_else(
            || (NOT_AVAILABLE.to_owned(), 0),
            |(word, count)| (word.to_owned(), count),
        );

    FinalStats {
        total_words,
        num_unique_words: frequencies.len(),
        most_common_word,
        most_common_word_occurrences,
        longest_word,
        average_word_length: average(length_sum, total_words),
        files_processed,
        ..FinalStats::default()
    }
}

#[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
fn average(sum: u64, count: u64) -> f64 {
    if count == 0 {
        return 0.0;
    }
    sum as f64 / count as f64
}
