//! Target dispatch: a single file is sized directly, a directory is listed.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DuError, Result};

use super::entry::ScanResult;
use super::lister::list_root_with_progress;
use super::options::ScanOptions;
use super::progress::ScanProgress;
use super::size::apparent_size;

/// What a scan found at the requested target.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Report {
    /// The target is not a directory; no traversal was done.
    File { path: PathBuf, size: u64 },
    /// The target is a directory; its immediate children, sized.
    Directory {
        path: PathBuf,
        #[serde(flatten)]
        result: ScanResult,
    },
}

impl Report {
    /// Absolute path of the target, for display.
    pub fn path(&self) -> &Path {
        match self {
            Report::File { path, .. } | Report::Directory { path, .. } => path,
        }
    }
}

/// Stat `target` and produce a [`Report`] for it.
///
/// Failing to stat the target or to list a directory target is fatal; every
/// other error is absorbed by the scan.
pub fn inspect<F>(target: &Path, options: &ScanOptions, on_progress: F) -> Result<Report>
where
    F: FnMut(ScanProgress),
{
    let metadata = fs::metadata(target).map_err(|e| DuError::from_io(target, e))?;
    let path = display_path(target);

    if !metadata.is_dir() {
        tracing::debug!(path = %path.display(), "Target is a file");
        return Ok(Report::File {
            path,
            size: apparent_size(&metadata),
        });
    }

    tracing::info!(path = %path.display(), hidden = options.include_hidden, "Scanning directory");

    let result = list_root_with_progress(target, options, on_progress)?;

    Ok(Report::Directory { path, result })
}

/// Absolute form of `target`, or `target` itself when that cannot be resolved.
fn display_path(target: &Path) -> PathBuf {
    std::path::absolute(target).unwrap_or_else(|_| target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inspect_file_target() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("single.bin");
        fs::write(&file, vec![0u8; 2048]).unwrap();

        let mut progress_calls = 0;
        let report = inspect(&file, &ScanOptions::default(), |_| progress_calls += 1).unwrap();

        match report {
            Report::File { path, size } => {
                assert_eq!(size, 2048);
                assert!(path.is_absolute());
                assert!(path.ends_with("single.bin"));
            }
            other => panic!("Expected file report, got {:?}", other),
        }
        assert_eq!(progress_calls, 0);
    }

    #[test]
    fn test_inspect_hidden_file_target_is_reported() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(".env");
        fs::write(&file, b"KEY=1").unwrap();

        let report = inspect(&file, &ScanOptions::default(), |_| {}).unwrap();

        assert!(matches!(report, Report::File { size: 5, .. }));
    }

    #[test]
    fn test_inspect_directory_target() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), b"abc").unwrap();

        let report = inspect(dir.path(), &ScanOptions::default(), |_| {}).unwrap();

        match &report {
            Report::Directory { result, .. } => {
                assert_eq!(result.total_size, 3);
                assert_eq!(result.total_count, 1);
            }
            other => panic!("Expected directory report, got {:?}", other),
        }
        assert!(report.path().is_absolute());
    }

    #[test]
    fn test_inspect_missing_target() {
        let result = inspect(
            Path::new("/nonexistent/path/12345"),
            &ScanOptions::default(),
            |_| {},
        );
        assert!(matches!(result, Err(DuError::PathNotFound(_))));
    }

    #[test]
    fn test_report_json_shape() {
        let report = Report::File {
            path: PathBuf::from("/tmp/x"),
            size: 9,
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["size"], 9);
    }
}
