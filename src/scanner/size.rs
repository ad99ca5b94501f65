use std::fs::Metadata;

/// Magnitude suffixes, each step a factor of 1024.
const UNITS: &[char] = &['K', 'M', 'G', 'T', 'P', 'E'];

/// Get apparent file size (content length)
pub fn apparent_size(metadata: &Metadata) -> u64 {
    metadata.len()
}

/// Format size in human-readable format.
///
/// Values below 1024 print as a plain byte count. Larger values are divided
/// by 1024 until the quotient drops below 1024 and printed with one decimal
/// place, e.g. `1.5 KB`.
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;

    if bytes < UNIT {
        return format!("{} B", bytes);
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;
    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, UNITS[exp])
}
