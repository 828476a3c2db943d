mod fake_runtime_locator;
mod fake_tool_runner;
mod mock_bridge_template_store;

pub use fake_runtime_locator::FakeRuntimeLocator;
pub use fake_tool_runner::FakeToolRunner;
pub use mock_bridge_template_store::MockBridgeTemplateStore;

/// `package.json` content as written by the Electron scaffolding tool.
pub fn scaffold_package_json(name: &str) -> String {
    let document = serde_json::json!({
        "name": name,
        "productName": name,
        "version": "1.0.0",
        "main": "src/index.js",
        "scripts": {
            "start": "electron-forge start",
            "package": "electron-forge package",
            "make": "electron-forge make"
        },
        "config": {
            "forge": {
                "packagerConfig": {},
                "makers": [
                    { "name": "@electron-forge/maker-squirrel", "config": { "name": name } },
                    { "name": "@electron-forge/maker-zip", "platforms": ["darwin"] },
                    { "name": "@electron-forge/maker-deb", "config": {} },
                    { "name": "@electron-forge/maker-rpm", "config": {} }
                ]
            }
        }
    });
    let mut content = serde_json::to_string_pretty(&document).unwrap();
    content.push('\n');
    content
}
