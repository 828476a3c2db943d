//! Pure text transformations applied to the copied entry script and bridge file.

pub mod port;
pub mod preamble;
pub mod tokens;

pub use port::{DEFAULT_PORT, detect_port, resolve_port};
pub use preamble::{UTF8_BOM, inject_preamble, preamble};
pub use tokens::{HOST_TOKEN, PORT_TOKEN, substitute_tokens};
