use std::path::Path;

use super::entry::ScanResult;
use super::inspect::Report;
use super::size::format_size;

const RULE: &str = "----------------------------------------";

/// Format a single-file target.
pub fn format_file(path: &Path, size: u64) -> String {
    format!("\nFile: {}\nSize: {}\n", path.display(), format_size(size))
}

/// Format a directory listing: header, one line per entry, totals.
pub fn format_listing(path: &Path, result: &ScanResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("\nContents of: {}\n", path.display()));
    output.push_str(RULE);
    output.push('\n');

    for entry in &result.entries {
        output.push_str(&format!(
            "{:<6} {:<15} {}\n",
            entry.kind.label(),
            format_size(entry.size),
            entry.name
        ));
    }

    output.push_str(RULE);
    output.push('\n');
    output.push_str(&format!(
        "TOTAL: {} ({} files)\n",
        format_size(result.total_size),
        result.total_count
    ));

    output
}

/// Format a report as human-readable text.
pub fn format_report(report: &Report) -> String {
    match report {
        Report::File { path, size } => format_file(path, *size),
        Report::Directory { path, result } => format_listing(path, result),
    }
}

/// Format a report as JSON
pub fn format_json(report: &Report, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::entry::Entry;
    use std::path::PathBuf;

    fn create_test_result() -> ScanResult {
        ScanResult {
            entries: vec![
                Entry::dir("target", 1048576),
                Entry::file("Cargo.lock", 2048),
                Entry::file("README.md", 300),
            ],
            total_size: 1048576 + 2048 + 300,
            total_count: 42,
        }
    }

    #[test]
    fn test_format_listing_snapshot() {
        let output = format_listing(Path::new("/work/project"), &create_test_result());

        insta::assert_snapshot!(output.trim(), @r"
        Contents of: /work/project
        ----------------------------------------
        DIR    1.0 MB          target
        FILE   2.0 KB          Cargo.lock
        FILE   300 B           README.md
        ----------------------------------------
        TOTAL: 1.0 MB (42 files)
        ");
    }

    #[test]
    fn test_format_listing_starts_with_blank_line() {
        let output = format_listing(Path::new("/x"), &ScanResult::default());

        assert!(output.starts_with("\nContents of: /x\n"));
        assert!(output.ends_with("TOTAL: 0 B (0 files)\n"));
    }

    #[test]
    fn test_format_file() {
        let output = format_file(Path::new("/work/big.iso"), 1536);
        assert_eq!(output, "\nFile: /work/big.iso\nSize: 1.5 KB\n");
    }

    #[test]
    fn test_format_report_dispatch() {
        let file = Report::File {
            path: PathBuf::from("/f"),
            size: 1,
        };
        assert!(format_report(&file).contains("File: /f"));

        let dir = Report::Directory {
            path: PathBuf::from("/d"),
            result: create_test_result(),
        };
        assert!(format_report(&dir).contains("Contents of: /d"));
    }

    #[test]
    fn test_format_json_directory() {
        let report = Report::Directory {
            path: PathBuf::from("/d"),
            result: create_test_result(),
        };

        let json: serde_json::Value =
            serde_json::from_str(&format_json(&report, true).unwrap()).unwrap();

        assert_eq!(json["type"], "directory");
        assert_eq!(json["path"], "/d");
        assert_eq!(json["total_count"], 42);
        assert_eq!(json["entries"][0]["name"], "target");
        assert_eq!(json["entries"][0]["kind"], "dir");
    }
}
