use std::fs;

use log::{debug, info};

use crate::app::commands::build::BuildPlan;
use crate::domain::{AppError, ScaffoldedProject};
use crate::ports::{ToolInvocation, ToolRunner};

/// Replace any previous project and run the scaffolding tool.
///
/// A failed tool run leaves whatever it produced in place.
pub fn scaffold_project<T: ToolRunner>(
    tools: &T,
    plan: &BuildPlan,
) -> Result<ScaffoldedProject, AppError> {
    let project = ScaffoldedProject::new(plan.project_root());

    if let Ok(metadata) = fs::symlink_metadata(&project.root_dir) {
        info!("removing previous build at {}", project.root_dir.display());
        if metadata.is_dir() {
            fs::remove_dir_all(&project.root_dir)?;
        } else {
            fs::remove_file(&project.root_dir)?;
        }
    }
    fs::create_dir_all(&plan.output_dir)?;

    let invocation = ToolInvocation::from_command_line(
        &plan.tools.scaffold,
        &[plan.app_name.as_str()],
        &plan.output_dir,
    )?;
    tools.run(&invocation)?;

    if !project.root_dir.is_dir() {
        return Err(AppError::ScaffoldIncomplete(project.root_dir.display().to_string()));
    }
    if !project.build_config_path.is_file() {
        return Err(AppError::ScaffoldIncomplete(project.build_config_path.display().to_string()));
    }
    fs::create_dir_all(&project.source_dir)?;

    debug!("scaffolded project at {}", project.root_dir.display());
    Ok(project)
}
