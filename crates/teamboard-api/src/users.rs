//! Users resource client.

use crate::channel::ApiChannel;
use crate::error::ApiError;
use crate::types::RawResponse;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

/// Client for the `users` resource.
#[derive(Debug, Clone)]
pub struct UserClient {
    channel: ApiChannel,
}

impl UserClient {
    pub fn new(channel: ApiChannel) -> Self {
        Self { channel }
    }

    /// Submit a sign-up payload. The response is handed back as received.
    #[instrument(skip(self, user))]
    pub async fn sign_up<T: Serialize + ?Sized>(&self, user: &T) -> Result<RawResponse, ApiError> {
        let request = self
            .channel
            .request(Method::POST, "users/sign-up")
            .header(CONTENT_TYPE, "application/json")
            .json(user);

        let response = self.channel.send(request).await?;
        debug!("Sign-up accepted with status {}", response.status);
        Ok(response)
    }
}
