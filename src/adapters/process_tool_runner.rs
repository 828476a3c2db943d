use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::domain::AppError;
use crate::ports::{ToolInvocation, ToolOutput, ToolRunner};

/// Runs tools as child processes resolved against `PATH`.
#[derive(Debug, Clone, Default)]
pub struct ProcessToolRunner {
    search_path: Option<OsString>,
}

impl ProcessToolRunner {
    /// Runner that searches the process `PATH`.
    pub fn new() -> Self {
        Self { search_path: env::var_os("PATH") }
    }

    /// Runner that searches an explicit path list.
    pub fn with_search_path(search_path: impl Into<OsString>) -> Self {
        Self { search_path: Some(search_path.into()) }
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        let program = self
            .resolve_program(&invocation.program)
            .unwrap_or_else(|| PathBuf::from(&invocation.program));
        debug!("running `{}` in {}", invocation, invocation.cwd.display());

        let mut command = Command::new(&program);
        command.args(&invocation.args);
        command.current_dir(&invocation.cwd);
        if let Some(path) = &self.search_path {
            command.env("PATH", path);
        }

        let output = command.output().map_err(|e| AppError::ExternalToolFailure {
            command: invocation.to_string(),
            code: "not started".to_string(),
            details: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!("`{}` exited with {}", invocation, output.status);

        if !output.status.success() {
            let details = if !stderr.is_empty() {
                stderr
            } else if !stdout.is_empty() {
                stdout
            } else {
                "Unknown error".to_string()
            };
            return Err(AppError::ExternalToolFailure {
                command: invocation.to_string(),
                code: output.status.to_string(),
                details,
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }

    fn resolve_program(&self, program: &str) -> Option<PathBuf> {
        find_program(program, self.search_path.as_deref())
    }
}

/// Locate `program` in the given search path.
///
/// Names containing a path separator are checked directly. On Windows the
/// `PATHEXT` extensions are tried as well, since npm ships `npx.cmd`.
pub fn find_program(program: &str, search_path: Option<&std::ffi::OsStr>) -> Option<PathBuf> {
    if program.contains('/') || program.contains('\\') {
        let candidate = PathBuf::from(program);
        return is_executable(&candidate).then_some(candidate);
    }

    let search_path = search_path?;
    env::split_paths(search_path).find_map(|dir| {
        executable_names(program).into_iter().map(|name| dir.join(name)).find(|p| is_executable(p))
    })
}

fn executable_names(program: &str) -> Vec<String> {
    let mut names = vec![program.to_string()];
    if cfg!(windows) {
        let pathext = env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
        names.extend(
            pathext.split(';').filter(|ext| !ext.is_empty()).map(|ext| format!("{program}{ext}")),
        );
    }
    names
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata().map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0).unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
