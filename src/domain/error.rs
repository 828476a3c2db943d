use std::io;

use thiserror::Error;

/// Library-wide error type for dashdesk operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// A required external command is not resolvable on PATH.
    #[error("Missing prerequisite: '{tool}' was not found on PATH. Install Node.js (npm/npx) first.")]
    PrerequisiteMissing { tool: String },

    /// Source path, entry file, or branding file does not exist.
    #[error("Input not found: {0}")]
    InputNotFound(String),

    /// The dashboard runtime module is not installed on this machine.
    #[error("Dependency missing: the '{name}' module is not installed. Install it or pass --runtime-dir.")]
    DependencyMissing { name: String },

    /// An external tool exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed ({code}): {details}")]
    ExternalToolFailure { command: String, code: String, details: String },

    /// The scaffolding tool succeeded but did not produce the expected layout.
    #[error("Scaffold incomplete: expected {0} to exist after scaffolding")]
    ScaffoldIncomplete(String),

    /// Application name is not usable as a directory and npm project name.
    #[error(
        "Invalid app name '{0}': must be alphanumeric with hyphens, underscores, or periods, and must not start with '.' or '_'"
    )]
    InvalidAppName(String),

    /// Runtime host selector is not recognized.
    #[error("Invalid runtime host '{0}': must be one of primary (pwsh), legacy (powershell)")]
    InvalidRuntimeHost(String),

    /// Missing CLI argument.
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// JSON (de)serialization failure on the scaffold build configuration.
    #[error("JSON error in build configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidAppName(_)
            | AppError::InvalidRuntimeHost(_)
            | AppError::MissingArgument(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::JsonError(_) | AppError::ScaffoldIncomplete(_) => io::ErrorKind::InvalidData,
            AppError::PrerequisiteMissing { .. }
            | AppError::InputNotFound(_)
            | AppError::DependencyMissing { .. } => io::ErrorKind::NotFound,
            AppError::ExternalToolFailure { .. } => io::ErrorKind::Other,
        }
    }
}
