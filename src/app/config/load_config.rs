//! Packager configuration loading from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::app::paths::absolutize;
use crate::domain::config::parse_config_content;
use crate::domain::project::CONFIG_FILE_NAME;
use crate::domain::{AppError, PackagerConfig};

/// Load `dashdesk.toml`.
///
/// An explicit path must exist. Otherwise the file is looked up in
/// `source_base`, and its absence yields the defaults. Relative paths inside
/// the file are resolved against the file's own directory.
pub fn load_config(
    explicit: Option<&Path>,
    source_base: &Path,
) -> Result<PackagerConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::InputNotFound(format!(
                    "configuration file {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = source_base.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                debug!("no {} next to source, using defaults", CONFIG_FILE_NAME);
                return Ok(PackagerConfig::default());
            }
            candidate
        }
    };

    debug!("loading configuration from {}", path.display());
    let content = fs::read_to_string(&path)?;
    let mut config = parse_config_content(&content)?;

    let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
    resolve_relative(&mut config.build.output_dir, &base);
    resolve_relative(&mut config.build.runtime_dir, &base);
    resolve_relative(&mut config.branding.setup_icon, &base);
    resolve_relative(&mut config.branding.loading_gif, &base);

    Ok(config)
}

fn resolve_relative(path: &mut Option<PathBuf>, base: &Path) {
    if let Some(value) = path.as_mut() {
        *value = absolutize(value, base);
    }
}
