//! Sign-up orchestration: normalize, submit, shape failures.

use crate::error::SubmissionError;
use crate::form::RegistrationForm;
use crate::normalizer::{normalize, NormalizedUser};
use async_trait::async_trait;
use serde_json::Value;
use teamboard_api::{ApiError, RawResponse, UserClient};
use tracing::{debug, error, instrument};

/// Shown when a failure carries nothing readable.
pub const FALLBACK_MESSAGE: &str = "Unexpected error during registration.";

/// Where normalized sign-ups are sent.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SignUpChannel: Send + Sync {
    async fn sign_up(&self, user: &NormalizedUser) -> Result<RawResponse, ApiError>;
}

#[async_trait]
impl SignUpChannel for UserClient {
    async fn sign_up(&self, user: &NormalizedUser) -> Result<RawResponse, ApiError> {
        UserClient::sign_up(self, user).await
    }
}

/// Submits registration forms that already passed both validation phases.
pub struct RegistrationService<C> {
    channel: C,
}

impl<C: SignUpChannel> RegistrationService<C> {
    pub fn new(channel: C) -> Self {
        Self { channel }
    }

    /// Normalize and submit. The response comes back untouched on success;
    /// status codes are left for the caller to interpret.
    #[instrument(skip(self, form))]
    pub async fn submit(&self, form: &RegistrationForm) -> Result<RawResponse, SubmissionError> {
        let user = normalize(form);

        match self.channel.sign_up(&user).await {
            Ok(response) => {
                debug!("Registration submitted, status {}", response.status);
                Ok(response)
            }
            Err(e) => {
                let message = readable_message(&e);
                error!("Error registering user: {} ({:?})", message, e);
                if e.status().is_some() {
                    Err(SubmissionError::Rejected(message))
                } else {
                    Err(SubmissionError::Failed(message))
                }
            }
        }
    }
}

/// Response body first, then the error's own message, then the fallback.
fn readable_message(error: &ApiError) -> String {
    if let Some(body) = error.response_body() {
        return match serde_json::from_str::<Value>(body) {
            Ok(Value::String(text)) if !text.is_empty() => text,
            _ => body.to_string(),
        };
    }

    let own = error.to_string();
    if own.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        own
    }
}
