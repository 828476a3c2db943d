pub mod embedded_bridge_template_store;
pub mod module_path_runtime_locator;
pub mod process_tool_runner;

pub use embedded_bridge_template_store::EmbeddedBridgeTemplateStore;
pub use module_path_runtime_locator::ModulePathRuntimeLocator;
pub use process_tool_runner::ProcessToolRunner;
