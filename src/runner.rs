use crate::api::{CanonicalClient, Method};
use crate::config::Config;
use tracing::{info, warn};

/// Run the request selected by `request.request_name` once.
///
/// Unknown request names and client construction problems are failures, the
/// same as a failed call.
pub fn run_request(config: &Config) -> bool {
    let method: Method = match config.request.request_name.parse() {
        Ok(method) => method,
        Err(e) => {
            warn!(target: "runner", "{}", e);
            return false;
        }
    };

    let client = match CanonicalClient::from_config(config) {
        Ok(client) => client,
        Err(e) => {
            warn!(target: "runner", "Could not build HTTP client: {}", e);
            return false;
        }
    };

    let (url_extension, body) = config.request.target(method);
    info!(
        target: "runner",
        "Running {} against {}",
        method,
        client.resource_url(url_extension)
    );

    client.execute(method, url_extension, body)
}
