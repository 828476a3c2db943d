use crate::ports::BridgeTemplateStore;

/// Bridge template store returning a fixed template.
#[derive(Debug, Clone, Default)]
pub struct MockBridgeTemplateStore {
    template: String,
}

impl MockBridgeTemplateStore {
    pub fn new(template: &str) -> Self {
        Self { template: template.to_string() }
    }
}

impl BridgeTemplateStore for MockBridgeTemplateStore {
    fn bridge_template(&self) -> String {
        self.template.clone()
    }
}
