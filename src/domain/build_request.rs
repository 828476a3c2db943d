use std::path::PathBuf;

use url::Url;

use crate::domain::{AppName, RuntimeHost};

/// Caller inputs for one packaging run.
///
/// Optional fields fall back to `dashdesk.toml`, then to built-in defaults.
#[derive(Debug, Clone)]
pub struct BuildRequest {
    /// Entry script, or a directory containing `dashboard.ps1`.
    pub source_path: PathBuf,
    pub app_name: AppName,
    pub output_dir: Option<PathBuf>,
    pub runtime_host: Option<RuntimeHost>,
    /// Listen port, bypassing detection from the entry script.
    pub port: Option<u16>,
    pub icon_url: Option<Url>,
    pub setup_icon_path: Option<PathBuf>,
    pub loading_image_path: Option<PathBuf>,
    /// Explicit runtime module directory, bypassing `PSModulePath` lookup.
    pub runtime_dir: Option<PathBuf>,
    /// Explicit configuration file, bypassing discovery next to the source.
    pub config_path: Option<PathBuf>,
    /// Stop after the project is configured, without running the build tool.
    pub skip_build: bool,
}

impl BuildRequest {
    pub fn new(source_path: impl Into<PathBuf>, app_name: AppName) -> Self {
        Self {
            source_path: source_path.into(),
            app_name,
            output_dir: None,
            runtime_host: None,
            port: None,
            icon_url: None,
            setup_icon_path: None,
            loading_image_path: None,
            runtime_dir: None,
            config_path: None,
            skip_build: false,
        }
    }
}

/// Result of a packaging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOutcome {
    /// Scaffolded project root.
    pub project_dir: PathBuf,
    /// Project `src/` holding the injected script and bridge file.
    pub source_dir: PathBuf,
    /// Build tool output location.
    pub artifact_dir: PathBuf,
    pub port: u16,
    pub runtime_host: RuntimeHost,
    /// Whether the build tool ran.
    pub built: bool,
}
