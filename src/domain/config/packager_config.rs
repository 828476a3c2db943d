//! Packager configuration domain models.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::{AppError, RuntimeHost};

/// Configuration loaded from `dashdesk.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagerConfig {
    /// Build defaults.
    #[serde(default)]
    pub build: BuildSection,
    /// Installer branding.
    #[serde(default)]
    pub branding: BrandingSection,
    /// External tool command lines.
    #[serde(default)]
    pub tools: ToolsSection,
}

impl PackagerConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.build.validate()?;
        self.tools.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSection {
    /// Directory the project is scaffolded under.
    pub output_dir: Option<PathBuf>,
    pub runtime_host: Option<RuntimeHost>,
    /// Listen port, bypassing detection.
    pub port: Option<u16>,
    /// Explicit location of the runtime module.
    pub runtime_dir: Option<PathBuf>,
}

impl BuildSection {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.port == Some(0) {
            return Err(AppError::config_error("build.port must be greater than 0"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BrandingSection {
    pub icon_url: Option<Url>,
    pub setup_icon: Option<PathBuf>,
    pub loading_gif: Option<PathBuf>,
}

/// Command lines for the scaffolding and build tools.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolsSection {
    /// Scaffolding command; the app name is appended as the last argument.
    #[serde(default = "default_scaffold_command")]
    pub scaffold: Vec<String>,
    /// Build command, run from the project root.
    #[serde(default = "default_build_command")]
    pub build: Vec<String>,
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self { scaffold: default_scaffold_command(), build: default_build_command() }
    }
}

impl ToolsSection {
    pub fn validate(&self) -> Result<(), AppError> {
        for (label, command) in [("tools.scaffold", &self.scaffold), ("tools.build", &self.build)] {
            if command.first().is_none_or(|program| program.trim().is_empty()) {
                return Err(AppError::config_error(format!("{} must name a program", label)));
            }
        }
        Ok(())
    }
}

fn default_scaffold_command() -> Vec<String> {
    vec!["npx".into(), "create-electron-app".into()]
}

fn default_build_command() -> Vec<String> {
    vec!["npm".into(), "run".into(), "make".into()]
}
