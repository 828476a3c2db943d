//! Pure parse/validate for packager configuration (`dashdesk.toml`).

use crate::domain::{AppError, PackagerConfig};

/// Parse and validate packager configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<PackagerConfig, AppError> {
    let config: PackagerConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
