use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::app::commands::build::BuildPlan;
use crate::app::commands::build::copy::copy_dir_recursive;
use crate::domain::{AppError, ScaffoldedProject};
use crate::ports::BridgeTemplateStore;

/// Copy the source, bridge file, and branding files into the project.
///
/// Returns the entry script bytes, read once from the caller's file.
pub fn install_sources<B: BridgeTemplateStore>(
    templates: &B,
    plan: &BuildPlan,
    project: &ScaffoldedProject,
) -> Result<Vec<u8>, AppError> {
    if let Some(root) = &plan.source.sibling_assets_root {
        // An output dir equal to the source would exclude everything.
        let excluded = if plan.output_dir != *root && plan.output_dir.starts_with(root) {
            plan.output_dir.clone()
        } else {
            plan.project_root()
        };
        let copied = copy_dir_recursive(root, &project.source_dir, &[&excluded])?;
        debug!("copied {} file(s) from {}", copied, root.display());
    }

    let entry = fs::read(&plan.source.entry_file)?;
    fs::copy(&plan.source.entry_file, project.entry_file())?;

    fs::write(project.bridge_file(), templates.bridge_template())?;

    for branding in [&plan.setup_icon, &plan.loading_gif].into_iter().flatten() {
        let already_copied =
            plan.source.sibling_assets_root.as_ref().is_some_and(|root| branding.starts_with(root));
        if !already_copied {
            copy_branding_file(branding, project)?;
        }
    }

    Ok(entry)
}

/// Copy a branding file to the top of `src/` unless that name is taken.
///
/// Returns false when an existing file shadows `path`; the installer then
/// references the existing file.
fn copy_branding_file(path: &Path, project: &ScaffoldedProject) -> Result<bool, AppError> {
    let file_name = path.file_name().ok_or_else(|| {
        AppError::InputNotFound(format!("branding file name in {}", path.display()))
    })?;
    let target = project.source_dir.join(file_name);
    if target.exists() {
        warn!(
            "branding file {} not copied: {} already exists and will be used instead",
            path.display(),
            target.display()
        );
        return Ok(false);
    }
    fs::copy(path, &target)?;
    debug!("copied branding file {}", target.display());
    Ok(true)
}
