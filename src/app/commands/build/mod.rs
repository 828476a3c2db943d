//! Build pipeline: resolve, scaffold, install, inject, patch, build.
//!
//! Each stage consumes the previous stage's output. The first failure aborts
//! the run and leaves the output directory as it was at that point.

mod copy;
mod inject;
mod install;
mod patch;
pub(crate) mod resolve;
mod scaffold;

use std::path::Path;

use log::info;

use crate::app::AppContext;
use crate::domain::{AppError, BuildOutcome, BuildRequest};
use crate::ports::{BridgeTemplateStore, RuntimeLocator, ToolRunner};

pub use resolve::BuildPlan;

/// Execute the build pipeline for one request.
///
/// `cwd` anchors relative paths in the request.
pub fn execute<T, B, L>(
    ctx: &AppContext<T, B, L>,
    request: BuildRequest,
    cwd: &Path,
) -> Result<BuildOutcome, AppError>
where
    T: ToolRunner,
    B: BridgeTemplateStore,
    L: RuntimeLocator,
{
    let plan = resolve::resolve_request(request, cwd)?;
    resolve::check_prerequisites(ctx.tools(), &plan)?;

    info!("scaffolding {} in {}", plan.app_name, plan.output_dir.display());
    let project = scaffold::scaffold_project(ctx.tools(), &plan)?;

    let entry = install::install_sources(ctx.templates(), &plan, &project)?;
    let port = inject::inject_bootstrap(&plan, &project, &entry)?;

    patch::install_runtime(ctx.runtime(), &plan, &project)?;
    patch::patch_build_config(&plan, &project)?;

    if plan.skip_build {
        info!("skipping build tool run");
    } else {
        info!("building installer for {}", plan.app_name);
        patch::run_build(ctx.tools(), &plan, &project)?;
    }

    Ok(BuildOutcome {
        artifact_dir: project.artifact_dir(),
        project_dir: project.root_dir,
        source_dir: project.source_dir,
        port,
        runtime_host: plan.runtime_host,
        built: !plan.skip_build,
    })
}
