use std::fs;

use log::debug;

use crate::app::commands::build::BuildPlan;
use crate::domain::bootstrap::{inject_preamble, resolve_port, substitute_tokens};
use crate::domain::{AppError, ScaffoldedProject};

/// Write the preamble-prefixed entry script and fill the bridge placeholders.
///
/// The script is handled as bytes so legacy code-page scripts survive;
/// port detection runs over a lossy UTF-8 view. Returns the resolved port.
pub fn inject_bootstrap(
    plan: &BuildPlan,
    project: &ScaffoldedProject,
    entry: &[u8],
) -> Result<u16, AppError> {
    fs::write(project.entry_file(), inject_preamble(entry))?;

    let port = resolve_port(plan.explicit_port, &String::from_utf8_lossy(entry));
    debug!("dashboard port {} (explicit: {:?})", port, plan.explicit_port);

    let bridge_path = project.bridge_file();
    let bridge = fs::read_to_string(&bridge_path)?;
    fs::write(&bridge_path, substitute_tokens(&bridge, plan.runtime_host, port))?;

    Ok(port)
}
