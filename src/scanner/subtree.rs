use std::path::Path;
use walkdir::WalkDir;

use crate::error::{DuError, Result};

use super::options::is_hidden;
use super::size::apparent_size;

/// Totals for one walked subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubtreeSize {
    /// Bytes of every regular file beneath the root
    pub bytes: u64,
    /// Regular files and symlinks beneath the root
    pub count: u64,
}

/// Sequentially walk `path` and sum what lies beneath it.
///
/// Hidden entries are skipped unless `include_hidden` is set; a hidden
/// directory is pruned with everything under it. Symlinks are counted but
/// never followed and contribute zero bytes. Directories are not counted.
///
/// Errors on individual entries are skipped. Only failing to open `path`
/// itself is returned.
pub fn size_subtree(path: &Path, include_hidden: bool) -> Result<SubtreeSize> {
    let walker = WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || include_hidden || !is_hidden(&e.file_name().to_string_lossy())
        });

    let mut total = SubtreeSize::default();

    for result in walker {
        let entry = match result {
            Ok(e) => e,
            Err(err) => {
                if err.depth() == 0 {
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("walk failed"));
                    return Err(DuError::from_io(path, source));
                }
                tracing::debug!(error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        if file_type.is_symlink() {
            total.count += 1;
            continue;
        }

        match entry.metadata() {
            Ok(metadata) => {
                total.bytes += apparent_size(&metadata);
                total.count += 1;
            }
            Err(err) => {
                tracing::debug!(path = %entry.path().display(), error = %err, "Skipping entry without metadata");
            }
        }
    }

    Ok(total)
}
