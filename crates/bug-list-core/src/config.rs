//! Build-time Configuration
//!
//! Values are fixed at compile time and never change for the life of the app.

/// Version shown in the nav header.
///
/// Taken from the `APP_VERSION` env var at build time, else the crate version.
pub const APP_VERSION: &str = match option_env!("APP_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Base URL of the bug API, from `BUG_API_URL` at build time
pub const API_BASE_URL: &str = match option_env!("BUG_API_URL") {
    Some(url) => url,
    None => "/api",
};

/// Header label for the configured version
pub fn version_label() -> String {
    format!("v{}", APP_VERSION)
}
