pub mod bootstrap;
pub mod build_request;
pub mod config;
pub mod error;
pub mod identifiers;
pub mod installer_config;
pub mod project;
pub mod runtime_host;

pub use build_request::{BuildOutcome, BuildRequest};
pub use config::{BrandingSection, BuildSection, PackagerConfig, ToolsSection};
pub use error::AppError;
pub use identifiers::AppName;
pub use installer_config::BrandingPatch;
pub use project::{ResolvedSource, ScaffoldedProject};
pub use runtime_host::RuntimeHost;
