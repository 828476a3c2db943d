pub mod packager_config;
pub mod parse;

pub use packager_config::{BrandingSection, BuildSection, PackagerConfig, ToolsSection};
pub use parse::parse_config_content;
