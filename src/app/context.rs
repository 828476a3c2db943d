use crate::ports::{BridgeTemplateStore, RuntimeLocator, ToolRunner};

/// Application context holding dependencies for command execution.
pub struct AppContext<T: ToolRunner, B: BridgeTemplateStore, L: RuntimeLocator> {
    tools: T,
    templates: B,
    runtime: L,
}

impl<T: ToolRunner, B: BridgeTemplateStore, L: RuntimeLocator> AppContext<T, B, L> {
    /// Create a new application context.
    pub fn new(tools: T, templates: B, runtime: L) -> Self {
        Self { tools, templates, runtime }
    }

    /// Get a reference to the external tool runner.
    pub fn tools(&self) -> &T {
        &self.tools
    }

    /// Get a reference to the bridge template store.
    pub fn templates(&self) -> &B {
        &self.templates
    }

    /// Get a reference to the runtime module locator.
    pub fn runtime(&self) -> &L {
        &self.runtime
    }
}
