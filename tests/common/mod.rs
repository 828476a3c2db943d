//! Shared testing utilities for dashdesk integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const DASHBOARD_SCRIPT: &str = "$Dashboard = New-UDDashboard -Title \"Ops\" -Content {\n    New-UDCard -Title \"Status\"\n}\nStart-UDDashboard -Dashboard $Dashboard -Port 10001 -Wait\n";

const FAKE_NPX: &str = r#"#!/bin/sh
echo "npx $*" >> "$(dirname "$0")/../tools.log"
for name; do :; done
mkdir -p "$name/src"
cat > "$name/package.json" <<'JSON'
{
  "name": "scaffolded",
  "productName": "scaffolded",
  "version": "1.0.0",
  "main": "src/index.js",
  "scripts": {
    "make": "electron-forge make"
  },
  "config": {
    "forge": {
      "packagerConfig": {},
      "makers": [
        {
          "name": "@electron-forge/maker-squirrel",
          "config": {
            "name": "scaffolded"
          }
        },
        {
          "name": "@electron-forge/maker-zip",
          "platforms": ["darwin"]
        }
      ]
    }
  }
}
JSON
echo "// scaffolded" > "$name/src/index.js"
"#;

const FAKE_NPM: &str = r#"#!/bin/sh
echo "npm $* in $(pwd)" >> "$(dirname "$0")/../tools.log"
if [ -n "$FAKE_NPM_FAIL" ]; then
  echo "maker-squirrel failed" >&2
  exit 3
fi
mkdir -p out/make/squirrel.windows
echo installer > out/make/squirrel.windows/Setup.exe
echo "npm warn deprecated electron-squirrel-startup" >&2
"#;

/// Isolated environment with fake Node.js tooling and an installed runtime module.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
    modules_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let bin_dir = root.path().join("bin");
        let modules_dir = root.path().join("modules");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake bin directory");

        let runtime = modules_dir.join("UniversalDashboard").join("2.9.0");
        fs::create_dir_all(&runtime).expect("Failed to create runtime module");
        fs::write(runtime.join("UniversalDashboard.psd1"), "@{ ModuleVersion = '2.9.0' }")
            .expect("Failed to write module manifest");

        let ctx = Self { root, work_dir, bin_dir, modules_dir };
        ctx.install_tool("npx", FAKE_NPX);
        ctx.install_tool("npm", FAKE_NPM);
        ctx
    }

    fn install_tool(&self, name: &str, script: &str) {
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake tool");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
                .expect("Failed to mark fake tool executable");
        }
    }

    /// Remove a fake tool so it can no longer be resolved.
    pub fn remove_tool(&self, name: &str) {
        fs::remove_file(self.bin_dir.join(name)).expect("Failed to remove fake tool");
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    /// Directory projects are scaffolded under.
    pub fn output_dir(&self) -> PathBuf {
        self.root.path().join("dist")
    }

    /// Lines recorded by the fake tools, in invocation order.
    pub fn tool_log(&self) -> Vec<String> {
        fs::read_to_string(self.root.path().join("tools.log"))
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// `PATH` containing the fake tools ahead of the system directories.
    pub fn search_path(&self) -> OsString {
        let mut entries = vec![self.bin_dir.clone()];
        entries.extend([PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
        std::env::join_paths(entries).expect("Failed to join PATH")
    }

    /// Write a dashboard source directory under the work directory.
    pub fn write_dashboard(&self, dir_name: &str) -> PathBuf {
        let dir = self.work_dir.join(dir_name);
        fs::create_dir_all(dir.join("pages")).expect("Failed to create dashboard dir");
        fs::write(dir.join("dashboard.ps1"), DASHBOARD_SCRIPT).expect("Failed to write script");
        fs::write(dir.join("pages").join("status.ps1"), "New-UDPage -Name Status")
            .expect("Failed to write page");
        dir
    }

    /// Build a command for invoking the compiled `dashdesk` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("dashdesk").expect("Failed to locate dashdesk binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.root.path())
            .env("PATH", self.search_path())
            .env("PSModulePath", &self.modules_dir)
            .env_remove("RUST_LOG")
            .env_remove("FAKE_NPM_FAIL");
        cmd
    }

    /// Project root created for `app_name`.
    pub fn project_dir(&self, app_name: &str) -> PathBuf {
        self.output_dir().join(app_name)
    }

    pub fn read_project_file(&self, app_name: &str, relative: &str) -> String {
        fs::read_to_string(self.project_dir(app_name).join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }
}
