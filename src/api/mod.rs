//! API endpoint handlers module
//!
//! Contains all HTTP endpoint handler implementations.

pub mod greeting;
pub mod health;
