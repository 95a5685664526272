// src/core/worker.rs
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read as _, Seek as _, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::aggregator::PartialAggregator;
use crate::core::partition::Chunk;
use crate::models::{PartialStats, Task};

/// Reads every file in `files`, in order, into a fresh aggregator owning
/// `tasks`. Files that cannot be opened are skipped.
#[must_use]
pub fn scan_files(files: &[PathBuf], tasks: &[Task]) -> PartialStats {
    let mut aggregator = PartialAggregator::new(tasks);
    for path in files {
        match File::open(path) {
            Ok(file) => {
                aggregator.file_opened();
                feed_lines(BufReader::new(file), path, &mut aggregator);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable file");
            }
        }
    }
    finish(aggregator, files.len())
}

/// Reads only the byte ranges described by `chunks`; an open-ended chunk
/// is read to end of file.
///
/// A file is counted as read once, by the worker holding its first chunk.
#[must_use]
pub fn scan_chunks(chunks: &[Chunk], tasks: &[Task]) -> PartialStats {
    let mut aggregator = PartialAggregator::new(tasks);
    for chunk in chunks {
        let opened = File::open(&chunk.path).and_then(|mut file| {
            file.seek(SeekFrom::Start(chunk.start))?;
            Ok(file)
        });
        match opened {
            Ok(file) => {
                if chunk.start == 0 {
                    aggregator.file_opened();
                }
                match chunk.end {
                    Some(end) => {
                        let reader = BufReader::new(file.take(end.saturating_sub(chunk.start)));
                        feed_lines(reader, &chunk.path, &mut aggregator);
                    }
                    None => feed_lines(BufReader::new(file), &chunk.path, &mut aggregator),
                }
            }
            Err(err) => {
                warn!(path = %chunk.path.display(), error = %err, "skipping unreadable chunk");
            }
        }
    }
    finish(aggregator, chunks.len())
}

fn finish(aggregator: PartialAggregator, inputs: usize) -> PartialStats {
    let stats = aggregator.finish();
    debug!(
        tasks = ?stats.tasks,
        inputs,
        files_read = stats.files_read,
        "worker finished"
    );
    stats
}

/// Feeds each line to the aggregator. Lines are decoded lossily so that
/// non-UTF-8 input still yields its ASCII words; a read error ends the file
/// early but keeps what was already counted.
fn feed_lines<R: BufRead>(mut reader: R, path: &Path, aggregator: &mut PartialAggregator) {
    let mut buf = Vec::with_capacity(256);
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let line: Cow<'_, str> = String::from_utf8_lossy(&buf);
                aggregator.observe_line(&line);
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "stopped reading file early");
                break;
            }
        }
    }
}
