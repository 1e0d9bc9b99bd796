//! Greeting endpoints
//!
//! The whole point of the service: a couple of fixed greeting strings
//! served on exact paths.

/// Body returned by `GET /`
pub const ROOT_GREETING: &str = "Welcome to Expressapp";

/// Body returned by `GET /app`
pub const APP_GREETING: &str = "Welcome to New Expressapp";

/// Root greeting endpoint
///
/// GET /
pub async fn root() -> &'static str {
    ROOT_GREETING
}

/// Secondary greeting endpoint
///
/// Only registered when `enable_app_route` is set.
///
/// GET /app
pub async fn app() -> &'static str {
    APP_GREETING
}
