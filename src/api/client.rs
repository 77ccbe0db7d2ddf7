use crate::api::envelope::{classify_response, Classification, Expectation};
use crate::api::error::RequestError;
use crate::api::models::{ItemData, SearchRequest};
use crate::api::token::{try_request_token, Credentials};
use crate::api::Method;
use crate::config::config::{ApiConfig, Config};
use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Authenticated request executor for one Canonical resource.
///
/// Every call fetches a fresh token, issues exactly one request, and
/// classifies the response envelope. Nothing is cached between calls.
#[derive(Clone)]
pub struct CanonicalClient {
    api: ApiConfig,
    credentials: Credentials,
    client: Client,
}

impl CanonicalClient {
    pub fn new(api: ApiConfig, credentials: Credentials) -> Result<Self> {
        let client = Client::builder()
            .timeout(api.timeout())
            .build()?;

        Ok(Self {
            api,
            credentials,
            client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api.clone(), config.credentials.clone())
    }

    /// `{api_url}/api/{version}/canonical/{name}/{url_extension}`
    pub fn resource_url(&self, url_extension: &str) -> String {
        format!(
            "{}/api/{}/canonical/{}/{}",
            self.api.api_url.trim_end_matches('/'),
            self.api.version,
            self.api.name,
            url_extension.trim_start_matches('/')
        )
    }

    /// Run one call and report what the envelope contained.
    pub fn execute_detailed(
        &self,
        method: Method,
        url_extension: &str,
        body: Option<&str>,
    ) -> Result<Classification, RequestError> {
        let token = try_request_token(&self.client, &self.api.token_url, &self.credentials)?;

        let url = self.resource_url(url_extension);
        debug!(target: "request", "{} {}", method, url);

        let mut request = self
            .client
            .request(method.as_reqwest(), &url)
            .header(AUTHORIZATION, token.authorization_header())
            .header(CONTENT_TYPE, "application/json");

        match body {
            Some(body) if method.has_body() => {
                request = request.body(body.to_string());
            }
            Some(_) => {
                debug!(target: "request", "Ignoring body for {} request", method);
            }
            None => {}
        }

        let response = request.send().map_err(RequestError::transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::status(status));
        }

        let text = response.text().map_err(RequestError::transport)?;
        Ok(classify_response(&text, Expectation::for_method(method)))
    }

    /// Run one call and collapse the outcome to success or failure.
    pub fn execute(&self, method: Method, url_extension: &str, body: Option<&str>) -> bool {
        match self.execute_detailed(method, url_extension, body) {
            Ok(classification) => {
                info!(target: "request", "{} {} -> {:?}", method, url_extension, classification);
                classification.is_success()
            }
            Err(e) => {
                warn!(target: "request", "{} {} failed: {}", method, url_extension, e);
                false
            }
        }
    }

    fn execute_json<T: Serialize>(&self, method: Method, url_extension: &str, body: &T) -> bool {
        match serde_json::to_string(body) {
            Ok(body) => self.execute(method, url_extension, Some(&body)),
            Err(e) => {
                warn!(target: "request", "{}", RequestError::from(e));
                false
            }
        }
    }

    pub fn get(&self, url_extension: &str) -> bool {
        self.execute(Method::Get, url_extension, None)
    }

    pub fn post(&self, url_extension: &str, body: &str) -> bool {
        self.execute(Method::Post, url_extension, Some(body))
    }

    pub fn patch(&self, url_extension: &str, body: &str) -> bool {
        self.execute(Method::Patch, url_extension, Some(body))
    }

    pub fn delete(&self, url_extension: &str) -> bool {
        self.execute(Method::Delete, url_extension, None)
    }

    /// Search by filters, one page at a time.
    pub fn search(&self, page: u32, page_size: u32, request: &SearchRequest) -> bool {
        let url_extension = format!("search?page={}&pageSize={}", page, page_size);
        self.execute_json(Method::Post, &url_extension, request)
    }

    /// Create a new item. The unique key field must not be part of `data`.
    pub fn create(&self, data: &ItemData) -> bool {
        self.execute_json(Method::Post, "", data)
    }

    pub fn update(&self, id: &str, data: &ItemData) -> bool {
        self.execute_json(Method::Patch, id, data)
    }
}
