//! Path normalization shared by input resolution and config loading.

use std::path::{Component, Path, PathBuf};

use directories::{BaseDirs, ProjectDirs};

use crate::domain::AppError;

/// Make `path` absolute against `base`, expanding a leading `~`.
///
/// Normalization is lexical: `.` is dropped and `..` pops a component.
/// Symlinks are left alone.
pub fn absolutize(path: &Path, base: &Path) -> PathBuf {
    let expanded = expand_home(path);
    let joined = if expanded.is_absolute() { expanded } else { base.join(expanded) };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn expand_home(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match BaseDirs::new() {
        Some(dirs) => dirs.home_dir().join(rest),
        None => path.to_path_buf(),
    }
}

/// Default output root: the per-user data directory of dashdesk.
pub fn default_output_dir() -> Result<PathBuf, AppError> {
    ProjectDirs::from("", "", "dashdesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            AppError::config_error(
                "Could not determine a default output directory; pass --output explicitly",
            )
        })
}
