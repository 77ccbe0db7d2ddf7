pub mod api;
pub mod config;
pub mod runner;
pub mod utils;

pub use api::CanonicalClient;
pub use config::Config;
pub use runner::run_request;
