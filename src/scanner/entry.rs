use serde::Serialize;

/// Whether an immediate child is a file-like object or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Label used in the text report.
    pub fn label(self) -> &'static str {
        match self {
            EntryKind::File => "FILE",
            EntryKind::Dir => "DIR",
        }
    }
}

/// One immediate child of the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Base name only
    pub name: String,

    /// Bytes; for a directory, the recursive sum of everything beneath it
    pub size: u64,

    pub kind: EntryKind,
}

impl Entry {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: EntryKind::File,
        }
    }

    pub fn dir(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            kind: EntryKind::Dir,
        }
    }
}

/// Aggregate output of one directory scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    /// Immediate children, largest first
    pub entries: Vec<Entry>,

    /// Bytes of every file counted anywhere in the scanned tree
    pub total_size: u64,

    /// Regular files and symlinks counted anywhere in the scanned tree
    pub total_count: u64,
}

impl ScanResult {
    /// Sort entries by size (largest first). Stable, so equal sizes keep
    /// their arrival order.
    pub fn sort_by_size(&mut self) {
        self.entries.sort_by(|a, b| b.size.cmp(&a.size));
    }

    pub fn find(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }
}
