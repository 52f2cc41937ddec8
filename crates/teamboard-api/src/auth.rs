//! Authorization header providers.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use tracing::warn;

/// Source of the headers that authenticate a request.
///
/// Called once per request. A provider with nothing to contribute returns an
/// empty map; the request then goes out unauthenticated rather than failing.
pub trait AuthHeaderProvider: Send + Sync {
    fn headers(&self) -> HeaderMap;
}

/// Provider for anonymous access.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl AuthHeaderProvider for NoAuth {
    fn headers(&self) -> HeaderMap {
        HeaderMap::new()
    }
}

/// Static bearer token.
///
/// The token is stored using `SecretString` so it never shows up in debug
/// output.
#[derive(Clone)]
pub struct BearerToken {
    token: SecretString,
}

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
        }
    }
}

impl AuthHeaderProvider for BearerToken {
    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let token = self.token.expose_secret().trim();
        if token.is_empty() {
            return headers;
        }

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => warn!("Bearer token is not a valid header value, sending no Authorization"),
        }
        headers
    }
}

/// Lets a token store plug in as a closure.
impl<F> AuthHeaderProvider for F
where
    F: Fn() -> HeaderMap + Send + Sync,
{
    fn headers(&self) -> HeaderMap {
        self()
    }
}
