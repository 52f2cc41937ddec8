//! Posts resource client.

use crate::channel::ApiChannel;
use crate::error::ApiError;
use crate::types::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error, instrument};
use urlencoding::encode;

/// Client for the `posts` resource.
///
/// Failures are logged and returned untouched so callers still see the
/// status and body the server sent.
#[derive(Debug, Clone)]
pub struct PostClient {
    channel: ApiChannel,
}

impl PostClient {
    pub fn new(channel: ApiChannel) -> Self {
        Self { channel }
    }

    /// List a company's posts, newest page of at most `limit` entries.
    #[instrument(skip(self))]
    pub async fn list_by_company(
        &self,
        company_id: &str,
        limit: u32,
    ) -> Result<Vec<Post>, ApiError> {
        let request = self
            .channel
            .request(Method::GET, &format!("posts/company/{}", encode(company_id)))
            .query(&[("limit", limit)]);

        match self.channel.send_json::<Vec<Post>>(request).await {
            Ok(posts) => {
                debug!("Fetched {} posts", posts.len());
                Ok(posts)
            }
            Err(e) => {
                error!("Error fetching posts for {}: {}", company_id, e);
                Err(e)
            }
        }
    }

    /// Create a post. Returns the full response; status is not interpreted.
    #[instrument(skip(self, draft))]
    pub async fn create(
        &self,
        user_id: &str,
        company_id: &str,
        draft: &PostDraft,
    ) -> Result<RawResponse, ApiError> {
        let payload = NewPostPayload::new(user_id, company_id, draft);
        let request = self
            .channel
            .request(Method::POST, "posts")
            .header(CONTENT_TYPE, "application/json")
            .json(&payload);

        self.channel.send(request).await.map_err(|e| {
            error!("Error creating post: {}", e);
            e
        })
    }

    /// Add the user's rating to a post.
    #[instrument(skip(self))]
    pub async fn rate_up(&self, post_id: &str, user_id: &str) -> Result<Value, ApiError> {
        let request = self
            .channel
            .request(
                Method::PATCH,
                &format!("posts/{}/rating/{}", encode(post_id), encode(user_id)),
            )
            .json(&RatingRequest { post_id, user_id });

        self.channel
            .send(request)
            .await
            .map(|response| response.body)
            .map_err(|e| {
                error!("Error rating post: {}", e);
                e
            })
    }
}
