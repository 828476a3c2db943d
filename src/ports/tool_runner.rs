use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// A single external tool invocation.
///
/// The working directory belongs to the invocation, so running a tool never
/// changes the caller's current directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ToolInvocation {
    /// Build an invocation from a configured command line plus extra arguments.
    pub fn from_command_line(
        command: &[String],
        extra_args: &[&str],
        cwd: &Path,
    ) -> Result<Self, AppError> {
        let (program, args) = command
            .split_first()
            .ok_or_else(|| AppError::config_error("Tool command line is empty"))?;
        let mut args = args.to_vec();
        args.extend(extra_args.iter().map(|arg| arg.to_string()));
        Ok(Self { program: program.clone(), args, cwd: cwd.to_path_buf() })
    }
}

impl fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Captured output of a successful tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external command-line tools synchronously.
pub trait ToolRunner {
    /// Run the tool to completion.
    ///
    /// A non-zero exit status is reported as `AppError::ExternalToolFailure`.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError>;

    /// Resolve a program name to an executable on the search path.
    fn resolve_program(&self, program: &str) -> Option<PathBuf>;
}
