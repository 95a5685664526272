// src/core/partition.rs
use std::fs::{self, File};
use std::io::{self, BufRead as _, BufReader, Seek as _, SeekFrom};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::models::Task;

/// A line-aligned byte range of one file, starting at `start`.
///
/// `end` is exclusive. The last chunk of every file has no `end` and reads
/// to end of file, so content beyond the size reported when the plan was
/// made is still read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub path: PathBuf,
    pub start: u64,
    pub end: Option<u64>,
}

impl Chunk {
    #[inline]
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

/// Splits `files` into at most `workers` contiguous blocks whose sizes differ
/// by at most one file.
///
/// Blocks keep corpus order, so worker `i` sees only files that come before
/// those of worker `i + 1`.
#[must_use]
pub fn split_files(files: &[PathBuf], workers: usize) -> Vec<&[PathBuf]> {
    if files.is_empty() {
        return Vec::new();
    }
    let workers = workers.clamp(1, files.len());
    let base = files.len() / workers;
    let extra = files.len() % workers;

    let mut blocks = Vec::with_capacity(workers);
    let mut rest = files;
    for index in 0..workers {
        let size = if index < extra { base.saturating_add(1) } else { base };
        let (block, tail) = rest.split_at(size.min(rest.len()));
        blocks.push(block);
        rest = tail;
    }
    blocks
}

/// Hands the helper tasks out round-robin so that every one of them is owned
/// by exactly one of `helpers` threads.
#[must_use]
pub fn distribute_tasks(helpers: usize) -> Vec<Vec<Task>> {
    let helpers = helpers.clamp(1, Task::HANDED_OFF.len());
    let mut assignments = vec![Vec::new(); helpers];
    for (index, task) in Task::HANDED_OFF.into_iter().enumerate() {
        if let Some(assignment) = assignments.get_mut(index % helpers) {
            assignment.push(task);
        }
    }
    assignments
}

/// Cuts the corpus into at most `workers` runs of chunks of roughly equal
/// byte size.
///
/// Cuts are moved forward to just past the next newline, so a line is never
/// shared by two chunks and no word can straddle a boundary. Chunks of a run
/// are in corpus order and runs follow each other in corpus order. Files
/// whose size cannot be read are skipped.
#[must_use]
pub fn plan_chunks(files: &[PathBuf], workers: usize) -> Vec<Vec<Chunk>> {
    let sized: Vec<(&PathBuf, u64)> = files
        .iter()
        .filter_map(|path| match fs::metadata(path) {
            Ok(metadata) => Some((path, metadata.len())),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping file that cannot be sized");
                None
            }
        })
        .collect();

    let workers = workers.max(1);
    let total = sized.iter().fold(0_u64, |sum, (_, len)| sum.saturating_add(*len));
    let quota = total
        .div_ceil(u64::try_from(workers).unwrap_or(u64::MAX))
        .max(1);

    let mut plan: Vec<Vec<Chunk>> = vec![Vec::new()];
    let mut filled: u64 = 0;

    for (path, len) in sized {
        let mut start: u64 = 0;
        loop {
            let last_run = plan.len() >= workers;
            let room = quota.saturating_sub(filled);
            let target = start.saturating_add(room);
            let cut = if last_run || room == 0 || target >= len {
                None
            } else {
                match line_boundary(path, target) {
                    Ok(Some(boundary)) if boundary > start && boundary < len => Some(boundary),
                    Ok(_) => None,
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "cannot align chunk, keeping rest of file together");
                        None
                    }
                }
            };

            push_chunk(&mut plan, path, start, cut);
            let end = cut.unwrap_or(len).max(start);
            filled = filled.saturating_add(end.saturating_sub(start));
            start = end;

            if filled >= quota && plan.len() < workers {
                plan.push(Vec::new());
                filled = 0;
            }
            if cut.is_none() {
                break;
            }
        }
    }

    plan.retain(|run| !run.is_empty());
    plan
}

fn push_chunk(plan: &mut Vec<Vec<Chunk>>, path: &Path, start: u64, end: Option<u64>) {
    if plan.is_empty() {
        plan.push(Vec::new());
    }
    if let Some(run) = plan.last_mut() {
        run.push(Chunk {
            path: path.to_path_buf(),
            start,
            end,
        });
    }
}

/// Returns the first offset at or after `pos` that starts a line, or `None`
/// if the file ends before a newline is found there.
fn line_boundary(path: &Path, pos: u64) -> io::Result<Option<u64>> {
    if pos == 0 {
        return Ok(Some(0));
    }
    let mut reader = BufReader::new(File::open(path)?);
    let probe = pos.saturating_sub(1);
    reader.seek(SeekFrom::Start(probe))?;
    let mut skipped = Vec::new();
    let read = reader.read_until(b'\n', &mut skipped)?;
    if read == 0 || skipped.last() != Some(&b'\n') {
        return Ok(None);
    }
    Ok(Some(probe.saturating_add(u64::try_from(read).unwrap_or(u64::MAX))))
}
