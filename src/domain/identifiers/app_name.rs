use crate::domain::AppError;
use crate::domain::identifiers::validation::validate_app_name;
use crate::impl_validated_id;

/// A validated application name.
///
/// Guarantees:
/// - Usable as a single directory name under the output root
/// - Accepted by the scaffolding tool as a project name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppName(String);

impl_validated_id!(AppName, validate_app_name, AppError::InvalidAppName);

impl From<AppName> for String {
    fn from(val: AppName) -> Self {
        val.0
    }
}
