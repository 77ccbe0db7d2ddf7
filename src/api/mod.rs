//! Canonical API client and models
//!
//! This module handles token acquisition, the authenticated resource calls,
//! and classification of the response envelope.

pub mod client;
pub mod envelope;
pub mod error;
pub mod models;
pub mod token;

pub use client::CanonicalClient;
pub use envelope::{Classification, Envelope, EnvelopeError, Expectation};
pub use error::{FailureKind, RequestError};
pub use models::{ItemData, SearchFilter, SearchRequest};
pub use token::{Credentials, Token};

use std::fmt;
use std::str::FromStr;

/// HTTP verbs supported by the Canonical API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// POST and PATCH carry a JSON body, GET and DELETE don't
    pub fn has_body(self) -> bool {
        matches!(self, Method::Post | Method::Patch)
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

impl FromStr for Method {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            "patch" => Ok(Method::Patch),
            "delete" => Ok(Method::Delete),
            other => Err(anyhow::anyhow!("Unknown request name: '{}'", other)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_reqwest().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_method_names() {
        assert_eq!("get".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("POST".parse::<Method>().unwrap(), Method::Post);
        assert_eq!(" Patch ".parse::<Method>().unwrap(), Method::Patch);
        assert_eq!("delete".parse::<Method>().unwrap(), Method::Delete);
        assert!("put".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_body_verbs() {
        assert!(Method::Post.has_body());
        assert!(Method::Patch.has_body());
        assert!(!Method::Get.has_body());
        assert!(!Method::Delete.has_body());
        assert_eq!(Method::Patch.to_string(), "PATCH");
    }
}
