//! Layout of the source being packaged and of the scaffolded Electron project.

use std::path::{Path, PathBuf};

/// Entry script expected inside a directory source.
pub const ENTRY_FILE_NAME: &str = "dashboard.ps1";

/// Bridge file written into the scaffold's `src/`.
pub const BRIDGE_FILE_NAME: &str = "index.js";

/// PowerShell module the packaged app imports.
pub const RUNTIME_MODULE_NAME: &str = "UniversalDashboard";

/// Alternative module directory names accepted when locating the runtime.
pub const RUNTIME_MODULE_ALIASES: &[&str] = &["UniversalDashboard", "UniversalDashboard.Community"];

/// Optional per-source configuration file.
pub const CONFIG_FILE_NAME: &str = "dashdesk.toml";

const SOURCE_DIR: &str = "src";
const BUILD_CONFIG_FILE: &str = "package.json";
const ARTIFACT_DIR: &str = "out/make";

/// Where the entry script comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSource {
    /// Absolute path to the entry script.
    pub entry_file: PathBuf,
    /// True when the caller pointed at a directory containing the entry script.
    pub is_directory_source: bool,
    /// Directory whose contents are copied alongside the entry script.
    pub sibling_assets_root: Option<PathBuf>,
}

impl ResolvedSource {
    /// Directory that contains the entry script.
    pub fn base_dir(&self) -> &Path {
        self.sibling_assets_root
            .as_deref()
            .or_else(|| self.entry_file.parent())
            .unwrap_or_else(|| Path::new("."))
    }
}

/// Paths inside a scaffolded Electron project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldedProject {
    pub root_dir: PathBuf,
    pub source_dir: PathBuf,
    pub build_config_path: PathBuf,
}

impl ScaffoldedProject {
    pub fn new(root_dir: PathBuf) -> Self {
        let source_dir = root_dir.join(SOURCE_DIR);
        let build_config_path = root_dir.join(BUILD_CONFIG_FILE);
        Self { root_dir, source_dir, build_config_path }
    }

    /// Directory electron-forge writes installers to.
    pub fn artifact_dir(&self) -> PathBuf {
        self.root_dir.join(ARTIFACT_DIR)
    }

    pub fn bridge_file(&self) -> PathBuf {
        self.source_dir.join(BRIDGE_FILE_NAME)
    }

    /// Copied entry script; always named `dashboard.ps1` so the bridge can find it.
    pub fn entry_file(&self) -> PathBuf {
        self.source_dir.join(ENTRY_FILE_NAME)
    }

    pub fn runtime_dir(&self) -> PathBuf {
        self.source_dir.join(RUNTIME_MODULE_NAME)
    }

    /// Project-relative reference to a file inside `src/`, usable after relocation.
    pub fn source_reference(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.source_dir).ok()?;
        let parts: Vec<String> =
            relative.components().map(|c| c.as_os_str().to_string_lossy().into_owned()).collect();
        Some(format!("./{}/{}", SOURCE_DIR, parts.join("/")))
    }
}
