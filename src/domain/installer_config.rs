//! Sparse branding patch over the scaffold's `package.json`.
//!
//! The Squirrel maker is found by name under `config.forge.makers`, never by
//! array position, so reordered scaffold output is tolerated.

use serde_json::{Map, Value};
use url::Url;

use crate::domain::AppError;

/// Substring identifying the Windows installer maker.
pub const INSTALLER_MAKER_PATTERN: &str = "squirrel";

pub const ICON_URL_KEY: &str = "iconUrl";
pub const SETUP_ICON_KEY: &str = "setupIcon";
pub const LOADING_GIF_KEY: &str = "loadingGif";

/// Branding fields to add to the installer maker's config.
///
/// File references are already project-relative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandingPatch {
    pub icon_url: Option<Url>,
    pub setup_icon: Option<String>,
    pub loading_gif: Option<String>,
}

impl BrandingPatch {
    pub fn is_empty(&self) -> bool {
        self.icon_url.is_none() && self.setup_icon.is_none() && self.loading_gif.is_none()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(url) = &self.icon_url {
            fields.push((ICON_URL_KEY, url.to_string()));
        }
        if let Some(path) = &self.setup_icon {
            fields.push((SETUP_ICON_KEY, path.clone()));
        }
        if let Some(path) = &self.loading_gif {
            fields.push((LOADING_GIF_KEY, path.clone()));
        }
        fields
    }
}

/// Locate the installer maker entry inside a parsed `package.json`.
pub fn find_installer_maker(document: &mut Value) -> Option<&mut Map<String, Value>> {
    document
        .get_mut("config")?
        .get_mut("forge")?
        .get_mut("makers")?
        .as_array_mut()?
        .iter_mut()
        .filter_map(Value::as_object_mut)
        .find(|maker| {
            maker
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.contains(INSTALLER_MAKER_PATTERN))
        })
}

/// Add each supplied branding field to the installer maker's `config` block.
///
/// Returns the keys written. An empty patch leaves the document untouched.
pub fn apply_branding(
    document: &mut Value,
    patch: &BrandingPatch,
) -> Result<Vec<&'static str>, AppError> {
    if patch.is_empty() {
        return Ok(Vec::new());
    }

    let maker = find_installer_maker(document).ok_or_else(|| {
        AppError::config_error(format!(
            "No installer maker matching '{}' found under config.forge.makers in package.json",
            INSTALLER_MAKER_PATTERN
        ))
    })?;

    let config = maker.entry("config").or_insert_with(|| Value::Object(Map::new()));
    if config.is_null() {
        *config = Value::Object(Map::new());
    }
    let config = config.as_object_mut().ok_or_else(|| {
        AppError::config_error("Installer maker 'config' in package.json is not an object")
    })?;

    let mut written = Vec::new();
    for (key, value) in patch.fields() {
        config.insert(key.to_string(), Value::String(value));
        written.push(key);
    }
    Ok(written)
}
