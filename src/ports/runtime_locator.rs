use std::path::PathBuf;

/// Port for finding the locally installed dashboard runtime module.
pub trait RuntimeLocator {
    /// Directory of the installed module, if any.
    fn locate_runtime(&self) -> Option<PathBuf>;
}
