use std::path::{Path, PathBuf};

use crate::ports::RuntimeLocator;

#[derive(Debug, Clone, Default)]
pub struct FakeRuntimeLocator {
    location: Option<PathBuf>,
}

impl FakeRuntimeLocator {
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self { location: Some(path.as_ref().to_path_buf()) }
    }

    pub fn missing() -> Self {
        Self::default()
    }
}

impl RuntimeLocator for FakeRuntimeLocator {
    fn locate_runtime(&self) -> Option<PathBuf> {
        self.location.clone()
    }
}
