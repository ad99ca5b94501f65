mod entry;
mod formatter;
mod inspect;
mod lister;
mod options;
mod progress;
mod size;
mod subtree;

pub use entry::{Entry, EntryKind, ScanResult};
pub use formatter::{format_file, format_json, format_listing, format_report};
pub use inspect::{inspect, Report};
pub use lister::{list_root, list_root_with_progress};
pub use options::{is_hidden, ScanOptions, DEFAULT_PROGRESS_INTERVAL, MAX_WORKERS};
pub use progress::{ProgressThrottle, ScanProgress};
pub use size::format_size;
pub use subtree::{size_subtree, SubtreeSize};
