use reqwest::StatusCode;
use std::fmt;
use thiserror::Error;

/// Coarse bucket for a failed HTTP exchange.
///
/// Only 400 and 404 get their own bucket; everything else (other statuses,
/// connection refused, timeouts, unreadable bodies) lands in `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BadRequest,
    NotFound,
    Other,
}

impl FailureKind {
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => FailureKind::BadRequest,
            StatusCode::NOT_FOUND => FailureKind::NotFound,
            _ => FailureKind::Other,
        }
    }

    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        err.status()
            .map(Self::from_status)
            .unwrap_or(FailureKind::Other)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::BadRequest => "bad request",
            FailureKind::NotFound => "not found",
            FailureKind::Other => "request failed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("no usable token from the authorization server")]
    Token,

    #[error("{kind}: {message}")]
    Transport { kind: FailureKind, message: String },

    #[error("could not encode request body: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl RequestError {
    pub fn transport(err: reqwest::Error) -> Self {
        RequestError::Transport {
            kind: FailureKind::from_reqwest(&err),
            message: err.to_string(),
        }
    }

    pub fn status(status: StatusCode) -> Self {
        RequestError::Transport {
            kind: FailureKind::from_status(status),
            message: format!("server answered {}", status),
        }
    }

    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            RequestError::Transport { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
