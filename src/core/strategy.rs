// src/core/strategy.rs
use std::path::PathBuf;
use tracing::debug;

use crate::core::partition::{distribute_tasks, plan_chunks, split_files};
use crate::core::worker::{scan_chunks, scan_files};
use crate::error::EngineError;
use crate::models::{PartialStats, Task};

/// One thread, one aggregator, every task.
#[must_use]
pub fn single_thread(files: &[PathBuf]) -> Vec<PartialStats> {
    vec![scan_files(files, &Task::ALL)]
}

/// Every worker reads the whole corpus but tracks different statistics.
///
/// Up to three helpers share the frequency, longest-word and word-count
/// tasks; the calling thread sums word lengths.
///
/// # Errors
///
/// Returns an error if a worker thread cannot be spawned or panics.
pub fn by_task(files: &[PathBuf], threads: usize) -> Result<Vec<PartialStats>, EngineError> {
    let helpers = threads.saturating_sub(1).clamp(1, Task::HANDED_OFF.len());
    let mut jobs: Vec<Vec<Task>> = distribute_tasks(helpers);
    jobs.push(vec![Task::AverageLength]);
    debug!(helpers, assignments = ?jobs, "splitting work by task");

    run_workers(
        jobs.into_iter()
            .map(|tasks| move || scan_files(files, &tasks))
            .collect(),
    )
}

/// Each worker owns a contiguous block of files and every task.
///
/// # Errors
///
/// Returns an error if a worker thread cannot be spawned or panics.
pub fn by_file(files: &[PathBuf], threads: usize) -> Result<Vec<PartialStats>, EngineError> {
    let blocks = split_files(files, threads);
    debug!(blocks = blocks.len(), "splitting work by file");

    run_workers(
        blocks
            .into_iter()
            .map(|block| move || scan_files(block, &Task::ALL))
            .collect(),
    )
}

/// Each worker owns a contiguous, line-aligned run of byte ranges and every
/// task.
///
/// # Errors
///
/// Returns an error if a worker thread cannot be spawned or panics.
pub fn by_chunk(files: &[PathBuf], threads: usize) -> Result<Vec<PartialStats>, EngineError> {
    let plan = plan_chunks(files, threads);
    debug!(runs = plan.len(), chunks = plan.iter().map(Vec::len).sum::<usize>(), "splitting work by chunk");

    run_workers(
        plan.into_iter()
            .map(|run| move || scan_chunks(&run, &Task::ALL))
            .collect(),
    )
}

/// Runs `jobs` concurrently and returns their results in job order.
///
/// All jobs but the last run on scoped threads spawned for this call; the
/// last runs on the calling thread. Every spawned thread is joined before
/// this returns.
fn run_workers<F>(mut jobs: Vec<F>) -> Result<Vec<PartialStats>, EngineError>
where
    F: FnOnce() -> PartialStats + Send,
{
    let Some(local) = jobs.pop() else {
        return Ok(Vec::new());
    };

    crossbeam::thread::scope(|scope| -> Result<Vec<PartialStats>, EngineError> {
        let handles = jobs
            .into_iter()
            .enumerate()
            .map(|(index, job)| {
                scope
                    .builder()
                    .name(format!("wordstat-worker-{index}"))
                    .spawn(move |_| job())
                    .map_err(EngineError::Spawn)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let own = local();

        let mut partials = handles
            .into_iter()
            .map(|handle| handle.join().map_err(|_| EngineError::WorkerPanicked))
            .collect::<Result<Vec<_>, _>>()?;
        partials.push(own);
        Ok(partials)
    })
    .map_err(|_| EngineError::WorkerPanicked)?
}
