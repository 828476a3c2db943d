//! Build command implementation.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Error as DialoguerError, Input};

use super::BuildArgs;
use crate::domain::{AppError, AppName, BuildRequest};

pub(super) fn run_build(args: BuildArgs) -> Result<(), AppError> {
    let name = match args.name {
        Some(name) => name,
        None => match prompt_app_name()? {
            Some(name) => name,
            None => return Ok(()),
        },
    };

    let mut request = BuildRequest::new(args.source, AppName::new(&name)?);
    request.output_dir = args.output;
    request.runtime_host = args.host;
    request.port = args.port;
    request.icon_url = args.icon_url;
    request.setup_icon_path = args.setup_icon;
    request.loading_image_path = args.loading_gif;
    request.runtime_dir = args.runtime_dir;
    request.config_path = args.config;
    request.skip_build = args.skip_build;

    let outcome = crate::app::api::build(request)?;

    if outcome.built {
        println!("✅ Packaged {} at {}", name, outcome.project_dir.display());
        println!("  Installers: {}", outcome.artifact_dir.display());
    } else {
        println!("✅ Configured {} at {} (build skipped)", name, outcome.project_dir.display());
    }
    println!("  Dashboard: {} on port {}", outcome.runtime_host.executable(), outcome.port);
    Ok(())
}

fn prompt_app_name() -> Result<Option<String>, AppError> {
    if !(std::io::stdin().is_terminal() && std::io::stdout().is_terminal()) {
        return Err(AppError::MissingArgument("--name is required".into()));
    }
    match Input::new().with_prompt("Application name").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::MissingArgument(format!("Failed to read app name: {}", err))),
    }
}
