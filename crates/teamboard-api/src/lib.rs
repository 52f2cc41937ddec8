//! Teamboard REST API client: posts and user sign-up.

mod auth;
mod channel;
mod error;
mod posts;
mod types;
mod users;

pub use auth::{AuthHeaderProvider, BearerToken, NoAuth};
pub use channel::ApiChannel;
pub use error::ApiError;
pub use posts::PostClient;
pub use types::*;
pub use users::UserClient;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Arc;
    use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_channel(mock_server: &MockServer) -> ApiChannel {
        ApiChannel::new(
            format!("{}/api/v1/", mock_server.uri()),
            Arc::new(BearerToken::new("test-token")),
        )
        .unwrap()
    }

    fn create_test_client(mock_server: &MockServer) -> PostClient {
        PostClient::new(create_test_channel(mock_server))
    }

    #[tokio::test]
    async fn test_list_by_company_returns_array_unwrapped() {
        let mock_server = MockServer::start().await;

        let posts = json!([
            {
                "id": "p1",
                "title": "Kickoff",
                "subject": "Planning",
                "description": "First sprint",
                "images": ["https://img/1.png"],
                "userId": "u1",
                "companyId": "co1",
                "rating": 3
            },
            {
                "id": "p2",
                "title": "Retro",
                "subject": "Review",
                "description": "What went well",
                "images": [],
                "userId": "u2",
                "companyId": "co1"
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/api/v1/posts/company/co1"))
            .and(query_param("limit", "10"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&posts))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.list_by_company("co1", 10).await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].title, "Kickoff");
        assert_eq!(result[0].images, vec!["https://img/1.png".to_string()]);
        assert_eq!(result[0].extra.get("rating"), Some(&json!(3)));
        assert_eq!(result[1].company_id, json!("co1"));
    }

    #[tokio::test]
    async fn test_list_by_company_tolerates_null_text_fields() {
        let mock_server = MockServer::start().await;

        let posts = json!([
            {
                "title": "T",
                "subject": null,
                "description": null,
                "images": null,
                "userId": "u1",
                "companyId": "co1"
            }
        ]);

        Mock::given(method("GET"))
            .and(path("/api/v1/posts/company/co1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&posts))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.list_by_company("co1", 5).await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "T");
        assert_eq!(result[0].subject, "");
        assert_eq!(result[0].description, "");
        assert!(result[0].images.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_company_default_limit() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/posts/company/co1"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client
            .list_by_company("co1", DEFAULT_POST_LIMIT)
            .await
            .unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_list_by_company_error_is_preserved() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v1/posts/company/co1"))
            .respond_with(ResponseTemplate::new(404).set_body_string("Company not found"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.list_by_company("co1", 5).await;

        match result {
            Err(ApiError::Api { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "Company not found");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_sends_trimmed_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/posts"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(json!({
                "title": "Hello",
                "subject": "Intro",
                "description": "Welcome to the team",
                "images": ["url1"],
                "userId": "u1",
                "companyId": "co1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "p9" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let draft = PostDraft {
            title: Some("  Hello ".into()),
            subject: Some("Intro\n".into()),
            description: Some(" Welcome to the team ".into()),
            images: vec!["url1".into()],
        };

        let response = client.create("u1", "co1", &draft).await.unwrap();
        assert_eq!(response.status, 201);
        assert!(response.is_success());
        assert_eq!(response.body, json!({ "id": "p9" }));
    }

    #[tokio::test]
    async fn test_create_failure_keeps_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/posts"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Title is required"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let err = client
            .create("u1", "co1", &PostDraft::default())
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.response_body(), Some("Title is required"));
    }

    #[tokio::test]
    async fn test_rate_up_returns_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/v1/posts/p1/rating/u1"))
            .and(body_json(json!({ "postId": "p1", "userId": "u1" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "rating": 4 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let body = client.rate_up("p1", "u1").await.unwrap();
        assert_eq!(body, json!({ "rating": 4 }));
    }

    #[tokio::test]
    async fn test_requests_without_token_have_no_authorization() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(header_exists("Authorization"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/posts/company/co1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let channel = ApiChannel::new(mock_server.uri(), Arc::new(NoAuth)).unwrap();
        let client = PostClient::new(channel);
        let result = client.list_by_company("co1", 5).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_sign_up_posts_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/users/sign-up"))
            .and(header("Authorization", "Bearer test-token"))
            .and(body_json(json!({ "email": "ana@x.com" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let users = UserClient::new(create_test_channel(&mock_server));
        let response = users
            .sign_up(&json!({ "email": "ana@x.com" }))
            .await
            .unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, json!({ "id": 7 }));
    }

    #[test]
    fn test_draft_images_not_an_array_become_empty() {
        let draft: PostDraft =
            serde_json::from_value(json!({ "title": "t", "images": "notAnArray" })).unwrap();
        assert!(draft.images.is_empty());

        let draft: PostDraft =
            serde_json::from_value(json!({ "title": "t", "images": ["url1"] })).unwrap();
        assert_eq!(draft.images, vec!["url1".to_string()]);

        let draft: PostDraft = serde_json::from_value(json!({ "images": null })).unwrap();
        assert!(draft.images.is_empty());
    }

    #[test]
    fn test_payload_omits_absent_text_fields() {
        let payload = NewPostPayload::new("u1", "co1", &PostDraft::default());
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            json!({ "images": [], "userId": "u1", "companyId": "co1" })
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ApiChannel::new("not a url", Arc::new(NoAuth));
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_url_joining() {
        let channel = ApiChannel::new("http://localhost:8080/api/v1/", Arc::new(NoAuth)).unwrap();
        assert_eq!(channel.base_url(), "http://localhost:8080/api/v1");
        assert_eq!(channel.url("posts"), "http://localhost:8080/api/v1/posts");
        assert_eq!(channel.url("/posts"), "http://localhost:8080/api/v1/posts");
    }
}
