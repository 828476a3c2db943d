pub mod app_name;
pub mod validation;

pub use app_name::AppName;
