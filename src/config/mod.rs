//! Configuration module for the ducky generator
//!
//! Provides types and parsing for `ducky.toml` configuration.

pub mod loader;
pub mod schema;

pub use schema::*;
