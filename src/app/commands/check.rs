//! Report whether the build machine can package a dashboard.

use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::config::load_config;
use crate::app::paths::absolutize;
use crate::domain::AppError;
use crate::domain::project::RUNTIME_MODULE_NAME;
use crate::ports::{BridgeTemplateStore, RuntimeLocator, ToolRunner};

#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Explicit runtime module directory to verify instead of searching.
    pub runtime_dir: Option<PathBuf>,
    /// Explicit configuration file; otherwise `dashdesk.toml` in the working directory.
    pub config_path: Option<PathBuf>,
}

/// One checked requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckItem {
    pub name: String,
    pub location: Option<PathBuf>,
}

impl CheckItem {
    pub fn is_ok(&self) -> bool {
        self.location.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub tools: Vec<CheckItem>,
    pub runtime: CheckItem,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.runtime.is_ok() && self.tools.iter().all(CheckItem::is_ok)
    }
}

pub fn execute<T, B, L>(
    ctx: &AppContext<T, B, L>,
    options: CheckOptions,
    cwd: &Path,
) -> Result<CheckReport, AppError>
where
    T: ToolRunner,
    B: BridgeTemplateStore,
    L: RuntimeLocator,
{
    let config_path = options.config_path.as_deref().map(|p| absolutize(p, cwd));
    let config = load_config(config_path.as_deref(), cwd)?;

    let mut tools = Vec::new();
    for command in [&config.tools.scaffold, &config.tools.build] {
        let Some(program) = command.first() else { continue };
        if tools.iter().any(|item: &CheckItem| &item.name == program) {
            continue;
        }
        tools.push(CheckItem {
            name: program.clone(),
            location: ctx.tools().resolve_program(program),
        });
    }

    let location = match options.runtime_dir.or(config.build.runtime_dir) {
        Some(dir) => {
            let dir = absolutize(&dir, cwd);
            dir.is_dir().then_some(dir)
        }
        None => ctx.runtime().locate_runtime(),
    };
    let runtime = CheckItem { name: RUNTIME_MODULE_NAME.to_string(), location };

    Ok(CheckReport { tools, runtime })
}
