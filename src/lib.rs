//! Helloworld greeting service library

// Public modules
pub mod api;
pub mod config;
pub mod middleware;
pub mod server;

// Re-export commonly used types
pub use config::Settings;
pub use server::App;
