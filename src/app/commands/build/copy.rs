use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::AppError;

/// Recursively copy `src` into `dst`, skipping any entry under `excluded`.
///
/// Returns the number of files copied.
pub fn copy_dir_recursive(src: &Path, dst: &Path, excluded: &[&Path]) -> Result<usize, AppError> {
    fs::create_dir_all(dst)?;

    let walker = WalkDir::new(src)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !excluded.iter().any(|skip| entry.path().starts_with(skip)));

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry.path().strip_prefix(src).map_err(|e| {
            AppError::config_error(format!("Failed to relativize {}: {}", entry.path().display(), e))
        })?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Find a file named `file_name` under `root`, preferring the shallowest match.
pub fn find_by_file_name(root: &Path, file_name: &std::ffi::OsStr) -> Option<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == file_name)
        .min_by_key(|entry| entry.depth())
        .map(|entry| entry.into_path())
}
