//! Utility functions for common operations.

use std::path::{Path, PathBuf};

/// First path in `dir` for `file_name` that does not exist yet.
///
/// `report.csv` becomes `report (1).csv`, `report (2).csv`, ... the way
/// browsers name repeated downloads.
pub fn next_free_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    };

    (1u32..)
        .map(|n| match ext {
            Some(ext) => dir.join(format!("{} ({}).{}", stem, n, ext)),
            None => dir.join(format!("{} ({})", stem, n)),
        })
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Keep the last `max_width` characters, prefixing "..." when cut
pub fn tail_truncate(text: &str, max_width: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_width {
        return text.to_string();
    }
    if max_width <= 3 {
        return text.chars().skip(char_count - max_width).collect();
    }
    let keep = max_width - 3;
    let tail: String = text.chars().skip(char_count - keep).collect();
    format!("...{}", tail)
}
