use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{ToolInvocation, ToolOutput, ToolRunner};

use super::scaffold_package_json;

const SCAFFOLD_PACKAGE: &str = "create-electron-app";

/// Records invocations and imitates the side effects of the Electron tooling.
///
/// A scaffold run creates `<cwd>/<name>/package.json` and `src/`; a build run
/// creates `<cwd>/out/make`.
#[derive(Default)]
pub struct FakeToolRunner {
    invocations: Mutex<Vec<ToolInvocation>>,
    missing: HashSet<String>,
    failing: HashSet<String>,
    skip_scaffold_output: bool,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `program` as absent from the search path.
    pub fn without_program(mut self, program: &str) -> Self {
        self.missing.insert(program.to_string());
        self
    }

    /// Make every run of `program` exit with a failure.
    pub fn failing(mut self, program: &str) -> Self {
        self.failing.insert(program.to_string());
        self
    }

    /// Let the scaffold run succeed without producing a project.
    pub fn without_scaffold_output(mut self) -> Self {
        self.skip_scaffold_output = true;
        self
    }

    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.invocations.lock().unwrap().clone()
    }

    fn write_scaffold(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        let Some(name) = invocation.args.last() else {
            return Ok(());
        };
        let root = invocation.cwd.join(name);
        fs::create_dir_all(root.join("src"))?;
        fs::write(root.join("package.json"), scaffold_package_json(name))?;
        fs::write(root.join("src").join("index.js"), "// scaffolded\n")?;
        Ok(())
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());

        if self.missing.contains(&invocation.program) {
            return Err(AppError::PrerequisiteMissing { tool: invocation.program.clone() });
        }
        if self.failing.contains(&invocation.program) {
            return Err(AppError::ExternalToolFailure {
                command: invocation.to_string(),
                code: "exit status: 1".to_string(),
                details: "simulated failure".to_string(),
            });
        }

        if invocation.args.iter().any(|arg| arg == SCAFFOLD_PACKAGE) {
            if !self.skip_scaffold_output {
                self.write_scaffold(invocation)?;
            }
        } else {
            fs::create_dir_all(invocation.cwd.join("out").join("make"))?;
        }

        Ok(ToolOutput { stdout: format!("ran {}", invocation), stderr: String::new() })
    }

    fn resolve_program(&self, program: &str) -> Option<PathBuf> {
        if self.missing.contains(program) {
            None
        } else {
            Some(PathBuf::from("/usr/bin").join(program))
        }
    }
}
