use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

use crate::error::{DuError, Result};

use super::entry::{Entry, ScanResult};
use super::options::ScanOptions;
use super::progress::{ProgressThrottle, ScanProgress};
use super::size::apparent_size;
use super::subtree::{size_subtree, SubtreeSize};

/// Immediate subdirectory queued for a worker.
#[derive(Debug)]
struct PendingDir {
    name: String,
    path: PathBuf,
}

/// Result a worker sends back for one subdirectory.
#[derive(Debug)]
struct MeasuredDir {
    name: String,
    path: PathBuf,
    size: Result<SubtreeSize>,
}

/// List the immediate children of `root` with their sizes.
pub fn list_root(root: &Path, options: &ScanOptions) -> Result<ScanResult> {
    list_root_with_progress(root, options, |_| {})
}

/// List the immediate children of `root`, reporting subdirectory progress.
///
/// Immediate files are sized inline. Immediate subdirectories are measured
/// on a bounded worker pool, one [`size_subtree`] walk per directory, and
/// their results are merged here on the calling thread. `on_progress` is
/// called at most once per `options.progress_interval` (plus a final
/// complete update) with the number of directories finished so far.
///
/// Fails only if `root` itself cannot be listed. Children that error are
/// left out of both the listing and the totals.
pub fn list_root_with_progress<F>(
    root: &Path,
    options: &ScanOptions,
    mut on_progress: F,
) -> Result<ScanResult>
where
    F: FnMut(ScanProgress),
{
    let read_dir = fs::read_dir(root).map_err(|e| DuError::from_io(root, e))?;

    let mut result = ScanResult::default();
    let mut pending = Vec::new();

    for item in read_dir {
        let dir_entry = match item {
            Ok(e) => e,
            Err(err) => {
                tracing::debug!(error = %err, "Skipping unreadable directory entry");
                continue;
            }
        };

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        if options.skips_name(&name) {
            continue;
        }

        let file_type = match dir_entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                tracing::debug!(name = %name, error = %err, "Skipping entry without file type");
                continue;
            }
        };

        if file_type.is_dir() {
            pending.push(PendingDir {
                name,
                path: dir_entry.path(),
            });
            continue;
        }

        // Symlinks are never followed and weigh nothing
        let size = if file_type.is_symlink() {
            0
        } else {
            match dir_entry.metadata() {
                Ok(metadata) => apparent_size(&metadata),
                Err(err) => {
                    tracing::debug!(name = %name, error = %err, "Skipping file without metadata");
                    continue;
                }
            }
        };

        result.total_size += size;
        result.total_count += 1;
        result.entries.push(Entry::file(name, size));
    }

    if !pending.is_empty() {
        measure_dirs(pending, options, &mut result, &mut on_progress)?;
    }

    result.sort_by_size();

    Ok(result)
}

/// Fan `pending` out to the worker pool and fold the results into `result`.
fn measure_dirs<F>(
    pending: Vec<PendingDir>,
    options: &ScanOptions,
    result: &mut ScanResult,
    on_progress: &mut F,
) -> Result<()>
where
    F: FnMut(ScanProgress),
{
    let total = pending.len();
    let workers = options.worker_count().min(total);
    let started = Instant::now();

    tracing::info!(directories = total, workers, "Measuring subdirectories");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("du-worker-{}", i))
        .build()
        .map_err(|e| DuError::WorkerPool(e.to_string()))?;

    let (tx, rx) = mpsc::channel::<MeasuredDir>();
    let include_hidden = options.include_hidden;

    for dir in pending {
        let tx = tx.clone();
        pool.spawn(move || {
            let size = size_subtree(&dir.path, include_hidden);
            // The receiver outlives every worker, so this cannot fail
            let _ = tx.send(MeasuredDir {
                name: dir.name,
                path: dir.path,
                size,
            });
        });
    }

    // The channel closes once every worker has dropped its sender
    drop(tx);

    let mut throttle = ProgressThrottle::new(options.progress_interval);
    let mut scanned = 0;

    for measured in rx {
        scanned += 1;

        let progress = ScanProgress { scanned, total };
        if throttle.should_emit(progress, Instant::now()) {
            on_progress(progress);
        }

        absorb(result, measured);
    }

    tracing::debug!(elapsed = ?started.elapsed(), "Subdirectories measured");

    Ok(())
}

/// Fold one worker result into the totals. A directory that could not be
/// walked is left out entirely.
fn absorb(result: &mut ScanResult, measured: MeasuredDir) {
    match measured.size {
        Ok(size) => {
            result.total_size += size.bytes;
            result.total_count += size.count;
            result.entries.push(Entry::dir(measured.name, size.bytes));
        }
        Err(err) => {
            tracing::debug!(
                path = %measured.path.display(),
                error = %err,
                "Dropping subdirectory that could not be walked"
            );
        }
    }
}
