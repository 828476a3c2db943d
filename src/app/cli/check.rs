//! Check command implementation.

use std::path::PathBuf;

use crate::app::api::{CheckItem, CheckOptions};
use crate::domain::AppError;

pub(super) fn run_check(
    runtime_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<i32, AppError> {
    let report = crate::app::api::check(CheckOptions { runtime_dir, config_path })?;

    for item in report.tools.iter().chain(std::iter::once(&report.runtime)) {
        print_item(item);
    }

    if report.is_ok() {
        println!("✅ Ready to package dashboards");
        Ok(0)
    } else {
        Ok(1)
    }
}

fn print_item(item: &CheckItem) {
    match &item.location {
        Some(path) => println!("✅ {}: {}", item.name, path.display()),
        None => println!("❌ {}: not found", item.name),
    }
}
