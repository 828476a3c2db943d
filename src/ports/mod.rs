mod bridge_template_store;
mod runtime_locator;
mod tool_runner;

pub use bridge_template_store::BridgeTemplateStore;
pub use runtime_locator::RuntimeLocator;
pub use tool_runner::{ToolInvocation, ToolOutput, ToolRunner};
