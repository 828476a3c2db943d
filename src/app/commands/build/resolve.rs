//! Input resolution: absolute paths, config merge, prerequisite checks.
//!
//! Nothing in this stage touches the filesystem beyond reading.

use std::path::{Path, PathBuf};

use log::debug;
use url::Url;

use crate::app::config::load_config;
use crate::app::paths::{absolutize, default_output_dir};
use crate::domain::project::ENTRY_FILE_NAME;
use crate::domain::{
    AppError, AppName, BuildRequest, ResolvedSource, RuntimeHost, ToolsSection,
};
use crate::ports::ToolRunner;

/// Fully resolved inputs for one pipeline run.
#[derive(Debug, Clone)]
pub struct BuildPlan {
    pub source: ResolvedSource,
    pub app_name: AppName,
    pub output_dir: PathBuf,
    pub runtime_host: RuntimeHost,
    pub explicit_port: Option<u16>,
    pub icon_url: Option<Url>,
    pub setup_icon: Option<PathBuf>,
    pub loading_gif: Option<PathBuf>,
    pub runtime_dir: Option<PathBuf>,
    pub tools: ToolsSection,
    pub skip_build: bool,
}

impl BuildPlan {
    /// Root of the project the scaffolding tool will create.
    pub fn project_root(&self) -> PathBuf {
        self.output_dir.join(self.app_name.as_str())
    }
}

/// Decide whether the source is an entry file or a directory holding one.
pub fn resolve_source(source_path: &Path) -> Result<ResolvedSource, AppError> {
    if !source_path.exists() {
        return Err(AppError::InputNotFound(format!("source path {}", source_path.display())));
    }

    if source_path.is_dir() {
        let entry_file = source_path.join(ENTRY_FILE_NAME);
        if !entry_file.is_file() {
            return Err(AppError::InputNotFound(format!(
                "{} in source directory {}",
                ENTRY_FILE_NAME,
                source_path.display()
            )));
        }
        return Ok(ResolvedSource {
            entry_file,
            is_directory_source: true,
            sibling_assets_root: Some(source_path.to_path_buf()),
        });
    }

    Ok(ResolvedSource {
        entry_file: source_path.to_path_buf(),
        is_directory_source: false,
        sibling_assets_root: None,
    })
}

/// Merge the request with `dashdesk.toml` and defaults into a plan.
///
/// Request values win over config values, config values over defaults.
pub fn resolve_request(request: BuildRequest, cwd: &Path) -> Result<BuildPlan, AppError> {
    let source = resolve_source(&absolutize(&request.source_path, cwd))?;
    debug!("resolved entry file {}", source.entry_file.display());

    let config_path = request.config_path.as_deref().map(|p| absolutize(p, cwd));
    let config = load_config(config_path.as_deref(), source.base_dir())?;

    if request.port == Some(0) {
        return Err(AppError::config_error("Port must be greater than 0"));
    }

    let output_dir = match request.output_dir.as_deref().map(|p| absolutize(p, cwd)) {
        Some(dir) => dir,
        None => match config.build.output_dir {
            Some(dir) => dir,
            None => default_output_dir()?,
        },
    };

    let setup_icon = existing_file(
        request.setup_icon_path.as_deref().map(|p| absolutize(p, cwd)).or(config.branding.setup_icon),
        "setup icon",
    )?;
    let loading_gif = existing_file(
        request
            .loading_image_path
            .as_deref()
            .map(|p| absolutize(p, cwd))
            .or(config.branding.loading_gif),
        "loading image",
    )?;

    let plan = BuildPlan {
        source,
        app_name: request.app_name,
        output_dir,
        runtime_host: request.runtime_host.or(config.build.runtime_host).unwrap_or_default(),
        explicit_port: request.port.or(config.build.port),
        icon_url: request.icon_url.or(config.branding.icon_url),
        setup_icon,
        loading_gif,
        runtime_dir: request
            .runtime_dir
            .as_deref()
            .map(|p| absolutize(p, cwd))
            .or(config.build.runtime_dir),
        tools: config.tools,
        skip_build: request.skip_build,
    };

    if plan.source.entry_file.starts_with(plan.project_root()) {
        return Err(AppError::config_error(format!(
            "Source {} lies inside the project directory {} that would be replaced",
            plan.source.entry_file.display(),
            plan.project_root().display()
        )));
    }

    Ok(plan)
}

fn existing_file(path: Option<PathBuf>, label: &str) -> Result<Option<PathBuf>, AppError> {
    match path {
        Some(path) if !path.is_file() => {
            Err(AppError::InputNotFound(format!("{} {}", label, path.display())))
        }
        other => Ok(other),
    }
}

/// Fail fast when a required launcher is not on PATH.
pub fn check_prerequisites<T: ToolRunner>(tools: &T, plan: &BuildPlan) -> Result<(), AppError> {
    let mut commands = vec![&plan.tools.scaffold];
    if !plan.skip_build {
        commands.push(&plan.tools.build);
    }

    for command in commands {
        let program = command
            .first()
            .ok_or_else(|| AppError::config_error("Tool command line is empty"))?;
        match tools.resolve_program(program) {
            Some(path) => debug!("prerequisite '{}' found at {}", program, path.display()),
            None => return Err(AppError::PrerequisiteMissing { tool: program.clone() }),
        }
    }
    Ok(())
}
