use crate::api::token::Credentials;
use crate::api::Method;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub credentials: Credentials,
    pub request: RequestConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the web API, without the `/api/...` part
    pub api_url: String,

    /// Canonical name (e.g. "ticket")
    pub name: String,

    /// Canonical version (e.g. "v1", "v3")
    pub version: String,

    /// Password-grant token endpoint
    pub token_url: String,

    /// Per-request timeout in seconds, 0 disables the timeout
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RequestConfig {
    /// Which request to run: "get", "post", "patch" or "delete"
    pub request_name: String,

    /// "" describes the item, "{id}" gets by id, "search?term=..." searches
    pub get_url_extension: String,

    /// "search?page=1&pageSize=10" searches by filters, "" creates an item
    pub post_url_extension: String,

    /// JSON body for the post request
    pub post_data: String,

    /// "{id}" deletes an item, "comments/{id}" deletes a comment
    pub delete_url_extension: String,

    /// "{id}" updates an item
    pub patch_url_extension: String,

    /// JSON body for the patch request, only the fields being updated
    pub patch_data: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost/Trebuchet.WebApi".to_string(),
            name: "ticket".to_string(),
            version: "v3".to_string(),
            token_url: "http://localhost/Trebuchet.WebApi/token".to_string(),
            timeout_secs: 30,
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            request_name: "get".to_string(),
            get_url_extension: String::new(),
            post_url_extension: "search?page=1&pageSize=10".to_string(),
            post_data: r#"{ "filters": [] }"#.to_string(),
            delete_url_extension: "{id}".to_string(),
            patch_url_extension: "{id}".to_string(),
            patch_data: "{}".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl RequestConfig {
    /// URL extension and body configured for `method`
    pub fn target(&self, method: Method) -> (&str, Option<&str>) {
        match method {
            Method::Get => (self.get_url_extension.as_str(), None),
            Method::Post => (self.post_url_extension.as_str(), Some(self.post_data.as_str())),
            Method::Patch => (self.patch_url_extension.as_str(), Some(self.patch_data.as_str())),
            Method::Delete => (self.delete_url_extension.as_str(), None),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            // Create default config if it doesn't exist
            let default_config = Self::default();
            default_config.save()?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load config from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {}", path.display(), e))?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    /// Get the default config file path
    pub fn get_config_path() -> Result<PathBuf> {
        Ok(crate::utils::app_paths::AppPaths::config_dir()?.join("config.toml"))
    }

    /// Create a default config file with comments
    pub fn create_default_with_comments() -> String {
        r#"# Canonical CLI Configuration File
# Location: ~/.config/canonical-cli/config.toml (Linux)
#           %APPDATA%\canonical-cli\config.toml (Windows)

[api]
# Base URL of the web API
api_url = "http://localhost/Trebuchet.WebApi"

# Canonical name (i.e. ticket) and version (i.e. v1, v2, v3)
name = "ticket"
version = "v3"

# Token endpoint used for the password grant
token_url = "http://localhost/Trebuchet.WebApi/token"

# Seconds to wait for each request (0 waits indefinitely)
timeout_secs = 30

[credentials]
username = ""
password = ""
client_id = ""
grant_type = "password"

[request]
# Request to run: "get", "post", "patch" or "delete"
request_name = "get"

# GET extensions:
#   ""                   describe the item (field definitions)
#   "{id}"               get by unique id
#   "search?term=[term]&fieldName=[fieldName]&fieldValue=[fieldValue]&page=[page]&pageSize=[size]"
#   "{id}/comments?page=[page]&pageSize=[size]"
#   "comments"           describe comments
get_url_extension = ""

# POST extensions:
#   "search?page=[page]&pageSize=[size]"   search by filters (post_data holds the filters)
#   ""                                     create item (post_data holds the fields)
#   "{id}/comment"                         create comment for item
post_url_extension = "search?page=1&pageSize=10"

# Search filters format:
#   { "filters": [ { "field": { "fieldName": "..", "searchTerm": ".." },
#                    "searchTerm": "..",
#                    "range": { "fieldName": "..", "gte": "..", "lte": ".." } } ] }
# Create format: { "field1": "value", "fieldn": "value" }
# Do not send the unique key field when creating.
post_data = '{ "filters": [] }'

# DELETE extensions: "{id}" or "comments/{id}"
delete_url_extension = "{id}"

# PATCH extension and data. Only send fields that are being updated:
# a blank value overwrites the field.
patch_url_extension = "{id}"
patch_data = '{}'
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.name, "ticket");
        assert_eq!(config.api.version, "v3");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.credentials.grant_type, "password");
        assert_eq!(config.request.request_name, "get");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = Config::default();
        config.credentials.username = "csdadmin".to_string();
        config.request.request_name = "patch".to_string();

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.credentials, config.credentials);
        assert_eq!(parsed.request, config.request);
        assert_eq!(parsed.api, config.api);
    }

    #[test]
    fn test_commented_template_parses() {
        let parsed: Config = toml::from_str(&Config::create_default_with_comments()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.api, defaults.api);
        assert_eq!(parsed.request, defaults.request);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: Config = toml::from_str(
            r#"
[api]
name = "incident"

[credentials]
username = "someone"
"#,
        )
        .unwrap();
        assert_eq!(parsed.api.name, "incident");
        assert_eq!(parsed.api.version, "v3");
        assert_eq!(parsed.credentials.username, "someone");
        assert_eq!(parsed.credentials.grant_type, "password");
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.api.api_url = "http://example.test".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.api.api_url, "http://example.test");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        assert!(Config::load_from(&temp_dir.path().join("absent.toml")).is_err());
    }

    #[test]
    fn test_zero_timeout_means_no_timeout() {
        let mut api = ApiConfig::default();
        assert_eq!(api.timeout(), Some(Duration::from_secs(30)));

        api.timeout_secs = 0;
        assert_eq!(api.timeout(), None);
    }

    #[test]
    fn test_request_target() {
        let request = RequestConfig::default();
        assert_eq!(request.target(Method::Get), ("", None));
        assert_eq!(
            request.target(Method::Post),
            ("search?page=1&pageSize=10", Some(r#"{ "filters": [] }"#))
        );
        assert_eq!(request.target(Method::Delete), ("{id}", None));
        assert_eq!(request.target(Method::Patch), ("{id}", Some("{}")));
    }
}
