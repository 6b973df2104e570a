//! README file discovery.

use std::fs;
use std::path::{Path, PathBuf};

/// Prioritized README variants checked before falling back to a scan.
pub const README_VARIANTS: &[&str] = &["README.md", "README", "readme.md", "Readme.md"];

/// Checks if file path is a README file.
///
/// Detects README files case insensitively with or without extension.
/// Recognized patterns: README, README.md, README.MD, readme.md, Readme.md
///
/// # Arguments
///
/// * `path`: File path to check
///
/// # Returns
///
/// True if file is a README, false otherwise
pub fn is_readme(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.to_lowercase().starts_with("readme"))
        .unwrap_or(false)
}

/// Finds the README file in a directory.
///
/// Checks the prioritized variants first, then scans the directory for any
/// file whose name starts with "readme" in any casing. The scan is sorted
/// so the pick is deterministic; read_dir order is platform dependent.
///
/// # Arguments
///
/// * `dir`: Directory to search
///
/// # Returns
///
/// Path to the README file, or None if the directory has none (or cannot
/// be read)
pub fn find_readme(dir: impl AsRef<Path>) -> Option<PathBuf> {
    let dir = dir.as_ref();

    for variant in README_VARIANTS {
        let candidate = dir.join(variant);
        if candidate.is_file() {
            return Some(candidate);
        }
    }

    let entries = fs::read_dir(dir).ok()?;
    let mut fallbacks: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_readme(path))
        .collect();

    fallbacks.sort();
    fallbacks.into_iter().next()
}
