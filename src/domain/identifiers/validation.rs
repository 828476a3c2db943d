/// Longest name npm accepts for a package.
pub const MAX_PACKAGE_NAME_LEN: usize = 214;

/// Validates an application name.
///
/// The name becomes both a directory under the output root and the npm
/// package name of the scaffolded project, so it must satisfy both.
///
/// Checks:
/// - Non-empty and at most 214 characters
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Does not start with '.' or '_'
/// - Characters are alphanumeric, '-', '_', or '.'
pub fn validate_app_name(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_PACKAGE_NAME_LEN {
        return false;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    if name == "." || name == ".." {
        return false;
    }
    if name.starts_with('.') || name.starts_with('_') {
        return false;
    }
    name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

#[macro_export]
macro_rules! impl_validated_id {
    ($name:ident, $validator:path, $err_variant:path) => {
        impl $name {
            /// Validate and create a new instance.
            pub fn new(id: &str) -> Result<Self, $crate::domain::AppError> {
                if $validator(id) { Ok(Self(id.to_string())) } else { Err($err_variant(id.to_string())) }
            }

            /// Return the inner string value.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
