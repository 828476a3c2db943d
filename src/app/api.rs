//! API facade for the application.
//!
//! Wires the production adapters into an `AppContext` and runs commands.

use std::path::Path;

use crate::adapters::{EmbeddedBridgeTemplateStore, ModulePathRuntimeLocator, ProcessToolRunner};
use crate::app::{
    AppContext,
    commands::{build, check},
};

pub use crate::app::commands::check::{CheckItem, CheckOptions, CheckReport};
pub use crate::domain::{AppError, AppName, BuildOutcome, BuildRequest, RuntimeHost};

/// Create an `AppContext` backed by the host environment.
fn create_context()
-> AppContext<ProcessToolRunner, EmbeddedBridgeTemplateStore, ModulePathRuntimeLocator> {
    AppContext::new(
        ProcessToolRunner::new(),
        EmbeddedBridgeTemplateStore::new(),
        ModulePathRuntimeLocator::from_env(),
    )
}

/// Package a dashboard script, resolving relative paths against the current directory.
pub fn build(request: BuildRequest) -> Result<BuildOutcome, AppError> {
    build_at(request, &std::env::current_dir()?)
}

/// Package a dashboard script, resolving relative paths against `cwd`.
pub fn build_at(request: BuildRequest, cwd: &Path) -> Result<BuildOutcome, AppError> {
    build::execute(&create_context(), request, cwd)
}

/// Check prerequisites from the current directory.
pub fn check(options: CheckOptions) -> Result<CheckReport, AppError> {
    check_at(options, &std::env::current_dir()?)
}

/// Check prerequisites, resolving relative paths against `cwd`.
pub fn check_at(options: CheckOptions, cwd: &Path) -> Result<CheckReport, AppError> {
    check::execute(&create_context(), options, cwd)
}
