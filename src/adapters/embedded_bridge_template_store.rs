use include_dir::{Dir, include_dir};

use crate::domain::project::BRIDGE_FILE_NAME;
use crate::ports::BridgeTemplateStore;

static BRIDGE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/bridge");

/// Bridge template compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedBridgeTemplateStore;

impl EmbeddedBridgeTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl BridgeTemplateStore for EmbeddedBridgeTemplateStore {
    fn bridge_template(&self) -> String {
        BRIDGE_DIR
            .get_file(BRIDGE_FILE_NAME)
            .and_then(|file| file.contents_utf8())
            .unwrap_or_default()
            .to_string()
    }
}
