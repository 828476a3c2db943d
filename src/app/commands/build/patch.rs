use std::fs;
use std::path::Path;

use log::{debug, info};
use serde_json::Value;

use crate::app::commands::build::BuildPlan;
use crate::app::commands::build::copy::{copy_dir_recursive, find_by_file_name};
use crate::domain::installer_config::apply_branding;
use crate::domain::project::RUNTIME_MODULE_NAME;
use crate::domain::{AppError, BrandingPatch, ScaffoldedProject};
use crate::ports::{RuntimeLocator, ToolInvocation, ToolRunner};

/// Copy the installed runtime module into the project's `src/`.
pub fn install_runtime<L: RuntimeLocator>(
    runtime: &L,
    plan: &BuildPlan,
    project: &ScaffoldedProject,
) -> Result<(), AppError> {
    let source = match &plan.runtime_dir {
        Some(dir) if dir.is_dir() => dir.clone(),
        Some(_) => return Err(missing_runtime()),
        None => runtime.locate_runtime().ok_or_else(missing_runtime)?,
    };

    let copied = copy_dir_recursive(&source, &project.runtime_dir(), &[])?;
    info!("copied {} runtime file(s) from {}", copied, source.display());
    Ok(())
}

fn missing_runtime() -> AppError {
    AppError::DependencyMissing { name: RUNTIME_MODULE_NAME.to_string() }
}

/// Add the supplied branding fields to the installer maker in `package.json`.
///
/// Without branding inputs the file is not rewritten.
pub fn patch_build_config(plan: &BuildPlan, project: &ScaffoldedProject) -> Result<(), AppError> {
    let patch = BrandingPatch {
        icon_url: plan.icon_url.clone(),
        setup_icon: plan.setup_icon.as_deref().map(|p| project_reference(p, project)).transpose()?,
        loading_gif: plan
            .loading_gif
            .as_deref()
            .map(|p| project_reference(p, project))
            .transpose()?,
    };
    if patch.is_empty() {
        debug!("no branding inputs; leaving {} untouched", project.build_config_path.display());
        return Ok(());
    }

    let content = fs::read_to_string(&project.build_config_path)?;
    let mut document: Value = serde_json::from_str(&content)?;
    let written = apply_branding(&mut document, &patch)?;

    let mut serialized = serde_json::to_string_pretty(&document)?;
    serialized.push('\n');
    fs::write(&project.build_config_path, serialized)?;

    debug!("patched installer maker with {}", written.join(", "));
    Ok(())
}

/// Reference a branding file by its copy inside `src/`, found by file name.
fn project_reference(path: &Path, project: &ScaffoldedProject) -> Result<String, AppError> {
    let file_name = path.file_name().ok_or_else(|| {
        AppError::InputNotFound(format!("branding file name in {}", path.display()))
    })?;
    find_by_file_name(&project.source_dir, file_name)
        .and_then(|copied| project.source_reference(&copied))
        .ok_or_else(|| {
            AppError::InputNotFound(format!(
                "{} inside {}",
                file_name.to_string_lossy(),
                project.source_dir.display()
            ))
        })
}

/// Run the build tool from the project root.
pub fn run_build<T: ToolRunner>(
    tools: &T,
    plan: &BuildPlan,
    project: &ScaffoldedProject,
) -> Result<(), AppError> {
    let invocation = ToolInvocation::from_command_line(&plan.tools.build, &[], &project.root_dir)?;
    let output = tools.run(&invocation)?;
    if !output.stdout.is_empty() {
        debug!("{}", output.stdout);
    }
    if !output.stderr.is_empty() {
        debug!("{}", output.stderr);
    }
    Ok(())
}
