use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use log::debug;

use crate::domain::project::RUNTIME_MODULE_ALIASES;
use crate::ports::RuntimeLocator;

/// Environment variable PowerShell reads its module search path from.
pub const MODULE_PATH_VAR: &str = "PSModulePath";

/// Finds the runtime module on the PowerShell module search path.
#[derive(Debug, Clone, Default)]
pub struct ModulePathRuntimeLocator {
    module_path: Option<OsString>,
}

impl ModulePathRuntimeLocator {
    /// Locator reading `PSModulePath` from the process environment.
    pub fn from_env() -> Self {
        Self { module_path: env::var_os(MODULE_PATH_VAR) }
    }

    /// Locator over an explicit module search path.
    pub fn with_module_path(module_path: impl Into<OsString>) -> Self {
        Self { module_path: Some(module_path.into()) }
    }
}

impl RuntimeLocator for ModulePathRuntimeLocator {
    fn locate_runtime(&self) -> Option<PathBuf> {
        let module_path = self.module_path.as_ref()?;
        for root in env::split_paths(module_path) {
            for name in RUNTIME_MODULE_ALIASES {
                let candidate = root.join(name);
                if candidate.is_dir() {
                    debug!("found runtime module at {}", candidate.display());
                    return Some(candidate);
                }
            }
        }
        None
    }
}
