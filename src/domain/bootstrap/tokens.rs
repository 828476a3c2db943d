use crate::domain::RuntimeHost;

/// Placeholder for the PowerShell executable in the bridge template.
pub const HOST_TOKEN: &str = "$PowerShellHost";

/// Placeholder for the dashboard listen port in the bridge template.
pub const PORT_TOKEN: &str = "$Port";

/// Replace every placeholder occurrence in the bridge template.
///
/// Literal replacement, no template evaluation.
pub fn substitute_tokens(template: &str, host: RuntimeHost, port: u16) -> String {
    template.replace(HOST_TOKEN, host.executable()).replace(PORT_TOKEN, &port.to_string())
}
