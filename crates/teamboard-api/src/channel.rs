//! Shared HTTP channel: base URL, auth headers and response decoding.

use crate::auth::AuthHeaderProvider;
use crate::error::ApiError;
use crate::types::RawResponse;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Request/response channel every resource client goes through.
///
/// Cheap to clone; clones share the connection pool and the auth provider.
#[derive(Clone)]
pub struct ApiChannel {
    client: Client,
    base_url: String,
    auth: Arc<dyn AuthHeaderProvider>,
}

impl fmt::Debug for ApiChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiChannel")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiChannel {
    /// Create a channel rooted at `base_url`, e.g. `http://localhost:8080/api/v1/`.
    pub fn new(
        base_url: impl Into<String>,
        auth: Arc<dyn AuthHeaderProvider>,
    ) -> Result<Self, ApiError> {
        let base_url = base_url.into();
        Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            auth,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the base.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request with this call's auth headers attached.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .headers(self.auth.headers())
    }

    /// Send and return status plus decoded body, or `ApiError::Api` for a
    /// non-success status.
    pub async fn send(&self, request: RequestBuilder) -> Result<RawResponse, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        debug!(
            "Response {}: {}",
            status,
            text.chars().take(200).collect::<String>()
        );
        Ok(RawResponse {
            status: status.as_u16(),
            body: decode_body(text),
        })
    }

    /// Send and deserialize the body as `T`.
    pub async fn send_json<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        serde_json::from_value(response.body).map_err(ApiError::from)
    }
}

fn decode_body(text: String) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
