use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::domain::AppError;

/// PowerShell host the packaged app launches to serve the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuntimeHost {
    /// PowerShell 7+ (`pwsh`)
    #[default]
    Primary,
    /// Windows PowerShell 5.1 (`powershell`)
    Legacy,
}

impl RuntimeHost {
    pub const ALL: [RuntimeHost; 2] = [RuntimeHost::Primary, RuntimeHost::Legacy];

    /// Executable name written into the bridge file.
    pub fn executable(self) -> &'static str {
        match self {
            RuntimeHost::Primary => "pwsh",
            RuntimeHost::Legacy => "powershell",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RuntimeHost::Primary => "primary",
            RuntimeHost::Legacy => "legacy",
        }
    }

    /// Parse from either the selector label or the executable name.
    pub fn from_name(name: &str) -> Option<RuntimeHost> {
        match name.trim().to_lowercase().as_str() {
            "primary" | "pwsh" => Some(RuntimeHost::Primary),
            "legacy" | "powershell" => Some(RuntimeHost::Legacy),
            _ => None,
        }
    }
}

impl fmt::Display for RuntimeHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.executable())
    }
}

impl FromStr for RuntimeHost {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuntimeHost::from_name(s).ok_or_else(|| AppError::InvalidRuntimeHost(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for RuntimeHost {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
