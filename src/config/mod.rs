//! Configuration module
//!
//! API location, credentials and the request to run, loaded from a TOML file.

pub mod config;

pub use config::{ApiConfig, Config, RequestConfig};
