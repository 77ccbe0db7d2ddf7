//! Utility functions and helpers
//!
//! Logging setup and application directories.

pub mod app_paths;
pub mod logging;
