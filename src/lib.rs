//! dashdesk: package a Universal Dashboard script as an Electron desktop application.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CheckItem, CheckOptions, CheckReport, build, build_at, check, check_at};
pub use domain::{AppError, AppName, BuildOutcome, BuildRequest, RuntimeHost};
