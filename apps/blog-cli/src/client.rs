//! Typed HTTP client for the posts API.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use blog_shared::{DeleteResponse, ErrorResponse, PostRequest, PostResponse};

/// Errors from talking to the API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status.
    #[error("{title} (HTTP {status}){}", detail_suffix(.detail))]
    Api {
        status: u16,
        title: String,
        detail: Option<String>,
    },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|d| format!(": {d}"))
        .unwrap_or_default()
}

/// Client for `/api/posts`.
pub struct PostsClient {
    http: Client,
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }

    fn post_url(&self, id: Uuid) -> String {
        format!("{}/api/posts/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<PostResponse>, ClientError> {
        tracing::debug!("GET {}", self.posts_url());
        let response = self.http.get(self.posts_url()).send().await?;
        decode(response).await
    }

    pub async fn get(&self, id: Uuid) -> Result<PostResponse, ClientError> {
        let response = self.http.get(self.post_url(id)).send().await?;
        decode(response).await
    }

    pub async fn create(&self, body: &PostRequest) -> Result<PostResponse, ClientError> {
        let response = self.http.post(self.posts_url()).json(body).send().await?;
        decode(response).await
    }

    pub async fn update(&self, id: Uuid, body: &PostRequest) -> Result<PostResponse, ClientError> {
        let response = self.http.put(self.post_url(id)).json(body).send().await?;
        decode(response).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<DeleteResponse, ClientError> {
        let response = self.http.delete(self.post_url(id)).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn an RFC 7807 error body into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    tracing::debug!(status = status.as_u16(), url = %response.url(), "Response received");

    if status.is_success() {
        return Ok(response.json().await?);
    }

    let error = match response.json::<ErrorResponse>().await {
        Ok(body) => ClientError::Api {
            status: status.as_u16(),
            title: body.title,
            detail: body.detail,
        },
        // Not a problem document, e.g. a proxy error page
        Err(_) => ClientError::Api {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            detail: None,
        },
    };
    Err(error)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const POST_ID: &str = "0f8fad5b-d9cb-469f-a165-70867728950e";

    fn post_json(title: &str) -> serde_json::Value {
        json!({
            "id": POST_ID,
            "title": title,
            "content": "World",
            "category": "general",
            "createdAt": "2024-03-01T09:30:00Z"
        })
    }

    #[test]
    fn test_base_url_trailing_slash_is_ignored() {
        let client = PostsClient::new("http://localhost:8080/");
        assert_eq!(client.posts_url(), "http://localhost:8080/api/posts");

        let id = Uuid::nil();
        assert_eq!(
            client.post_url(id),
            "http://localhost:8080/api/posts/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn test_api_error_message() {
        let err = ClientError::Api {
            status: 422,
            title: "Validation Failed".into(),
            detail: Some("title is required".into()),
        };
        assert_eq!(
            err.to_string(),
            "Validation Failed (HTTP 422): title is required"
        );

        let err = ClientError::Api {
            status: 500,
            title: "Internal Server Error".into(),
            detail: None,
        };
        assert_eq!(err.to_string(), "Internal Server Error (HTTP 500)");
    }

    #[tokio::test]
    async fn test_list_decodes_posts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([post_json("a"), post_json("b")])),
            )
            .mount(&server)
            .await;

        let posts = PostsClient::new(&server.uri()).list().await.unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["a", "b"]);
        assert_eq!(posts[0].id.to_string(), POST_ID);
    }

    #[tokio::test]
    async fn test_create_sends_all_fields() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts"))
            .and(body_json(json!({
                "title": "Hello",
                "content": "World",
                "category": "general"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(post_json("Hello")))
            .expect(1)
            .mount(&server)
            .await;

        let body = PostRequest {
            title: "Hello".into(),
            content: "World".into(),
            category: "general".into(),
        };
        let post = PostsClient::new(&server.uri()).create(&body).await.unwrap();

        assert_eq!(post.title, "Hello");
        assert_eq!(post.category, "general");
    }

    #[tokio::test]
    async fn test_problem_document_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "type": "about:blank",
                "title": "Validation Failed",
                "status": 422,
                "detail": "title is required",
                "errors": ["title is required"]
            })))
            .mount(&server)
            .await;

        let err = PostsClient::new(&server.uri())
            .create(&PostRequest::default())
            .await
            .unwrap_err();

        match err {
            ClientError::Api {
                status,
                title,
                detail,
            } => {
                assert_eq!(status, 422);
                assert_eq!(title, "Validation Failed");
                assert_eq!(detail.as_deref(), Some("title is required"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_not_found_on_get() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/api/posts/{POST_ID}")))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "type": "about:blank",
                "title": "Not Found",
                "status": 404,
                "detail": format!("Post with id {POST_ID} not found")
            })))
            .mount(&server)
            .await;

        let id = Uuid::parse_str(POST_ID).unwrap();
        let err = PostsClient::new(&server.uri()).get(id).await.unwrap_err();

        assert!(matches!(err, ClientError::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_plain_text_error_falls_back_to_status_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/posts"))
            .respond_with(ResponseTemplate::new(502).set_body_string("upstream went away"))
            .mount(&server)
            .await;

        let err = PostsClient::new(&server.uri()).list().await.unwrap_err();

        assert_eq!(err.to_string(), "Bad Gateway (HTTP 502)");
    }

    #[tokio::test]
    async fn test_delete_returns_confirmation() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/api/posts/{POST_ID}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Post deleted"})))
            .mount(&server)
            .await;

        let id = Uuid::parse_str(POST_ID).unwrap();
        let confirmation = PostsClient::new(&server.uri()).delete(id).await.unwrap();

        assert_eq!(confirmation.message, "Post deleted");
    }
}
