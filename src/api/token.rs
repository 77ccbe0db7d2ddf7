use crate::api::error::RequestError;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Password-grant credentials sent to the token endpoint.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub client_id: String,
    pub grant_type: String,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            client_id: String::new(),
            grant_type: "password".to_string(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("client_id", &self.client_id)
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

impl Credentials {
    fn form_fields(&self) -> [(&str, &str); 4] {
        [
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("client_id", self.client_id.as_str()),
            ("grant_type", self.grant_type.as_str()),
        ]
    }
}

/// Raw token endpoint payload. Anything beyond these two fields is ignored.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    token_type: Option<String>,
}

/// A bearer token as handed out by the authorization server.
#[derive(Clone, PartialEq, Eq)]
pub struct Token {
    pub access_token: String,
    pub token_type: String,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("token_type", &self.token_type)
            .finish_non_exhaustive()
    }
}

impl Token {
    /// Parse a token endpoint response body. Both `access_token` and
    /// `token_type` must be present and non-empty.
    pub fn from_response_text(text: &str) -> Option<Self> {
        if text.trim().is_empty() {
            return None;
        }

        let response: TokenResponse = match serde_json::from_str(text) {
            Ok(response) => response,
            Err(e) => {
                debug!(target: "token", "Token response is not JSON: {}", e);
                return None;
            }
        };

        let access_token = response.access_token.filter(|t| !t.is_empty())?;
        let token_type = response.token_type.filter(|t| !t.is_empty())?;

        Some(Self {
            access_token,
            token_type,
        })
    }

    /// Value for the `Authorization` header, e.g. `bearer abc`.
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

/// POST the credentials to `token_url` and parse the answer.
pub fn try_request_token(
    client: &Client,
    token_url: &str,
    credentials: &Credentials,
) -> Result<Token, RequestError> {
    debug!(target: "token", "Requesting token from {} for {}", token_url, credentials.username);

    let fields = credentials.form_fields();
    let response = client
        .post(token_url)
        .form(fields.as_slice())
        .send()
        .map_err(RequestError::transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(RequestError::status(status));
    }

    let text = response.text().map_err(RequestError::transport)?;
    Token::from_response_text(&text).ok_or(RequestError::Token)
}

/// Same as [`try_request_token`] but swallows the reason after logging it.
pub fn request_token(client: &Client, token_url: &str, credentials: &Credentials) -> Option<Token> {
    match try_request_token(client, token_url, credentials) {
        Ok(token) => Some(token),
        Err(e) => {
            warn!(target: "token", "Token request failed: {}", e);
            None
        }
    }
}
