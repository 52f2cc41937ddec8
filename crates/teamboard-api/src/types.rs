//! Request and response types for the teamboard API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Default page size for company post listings.
pub const DEFAULT_POST_LIMIT: u32 = 5;

/// A post as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<String>,
    #[serde(default)]
    pub user_id: Value,
    #[serde(default)]
    pub company_id: Value,
    /// Backend-owned fields (id, rating, timestamps) kept as received.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Caller input for creating a post.
///
/// `images` accepts anything; a value that is not an array of strings
/// becomes an empty list.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PostDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "images_or_empty")]
    pub images: Vec<String>,
}

/// Body sent to `POST posts`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPostPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub images: Vec<String>,
    pub user_id: String,
    pub company_id: String,
}

impl NewPostPayload {
    /// Build the create payload: text fields trimmed, owner ids attached.
    pub fn new(user_id: &str, company_id: &str, draft: &PostDraft) -> Self {
        let trimmed = |s: &Option<String>| s.as_deref().map(|v| v.trim().to_string());
        Self {
            title: trimmed(&draft.title),
            subject: trimmed(&draft.subject),
            description: trimmed(&draft.description),
            images: draft.images.clone(),
            user_id: user_id.to_string(),
            company_id: company_id.to_string(),
        }
    }
}

/// Body sent to the rating endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest<'a> {
    pub post_id: &'a str,
    pub user_id: &'a str,
}

/// Status and decoded body of a completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// JSON body, `Value::String` for non-JSON text, `Value::Null` when empty.
    pub body: Value,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn images_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
