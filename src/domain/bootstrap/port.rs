//! Best-effort listen port detection over the entry script text.
//!
//! Only literal `-Port <digits>` arguments on the same line as a
//! `Start-UDDashboard ... -Wait` call are recognized. Ports passed through
//! variables, splatting, or continued lines fall back to the default.

use std::sync::OnceLock;

use regex::Regex;

/// Port used when the entry script does not name one.
pub const DEFAULT_PORT: u16 = 80;

static START_CALL: OnceLock<Regex> = OnceLock::new();
static PORT_ARG: OnceLock<Regex> = OnceLock::new();
static WAIT_ARG: OnceLock<Regex> = OnceLock::new();

fn start_call() -> &'static Regex {
    START_CALL.get_or_init(|| {
        Regex::new(r"(?im)\bStart-UDDashboard\b(?P<args>[^\r\n]*)").expect("valid start pattern")
    })
}

fn port_arg() -> &'static Regex {
    PORT_ARG.get_or_init(|| Regex::new(r"(?i)-Port(?::\s*|\s+)(\d+)\b").expect("valid port pattern"))
}

fn wait_arg() -> &'static Regex {
    WAIT_ARG.get_or_init(|| Regex::new(r"(?i)-Wait\b").expect("valid wait pattern"))
}

/// Find the port of the first blocking `Start-UDDashboard` call with a literal `-Port`.
pub fn detect_port(entry_text: &str) -> Option<u16> {
    start_call().captures_iter(entry_text).find_map(|call| {
        let args = call.name("args")?.as_str();
        if !wait_arg().is_match(args) {
            return None;
        }
        port_arg().captures(args)?.get(1)?.as_str().parse::<u16>().ok()
    })
}

/// Resolve the listen port: explicit override, then detection, then the default.
pub fn resolve_port(explicit: Option<u16>, entry_text: &str) -> u16 {
    explicit.or_else(|| detect_port(entry_text)).unwrap_or(DEFAULT_PORT)
}
