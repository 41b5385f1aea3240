//! Configuration module for the hub network
//!
//! Supports loading configuration from TOML files and environment variables.

mod settings;

pub use settings::*;
