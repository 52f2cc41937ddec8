//! Teamboard API client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Failure reported by a non-HTTP channel implementation.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw body of the failed response. `None` when there was no response
    /// or the server sent an empty body.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            ApiError::Api { body, .. } if !body.is_empty() => Some(body),
            _ => None,
        }
    }
}
