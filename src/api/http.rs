//! Native HTTP Backend
//!
//! [`Backend`] over `reqwest`, for desktop hosts, tools and tests.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;

use super::{read_json, read_message, unreadable_body, Backend, Endpoint, Method};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::Activities;

/// Activity service client
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a client from the API section of the config
    ///
    /// Unlike the browser there is no page origin to resolve against, so
    /// the base URL must be absolute.
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        Url::parse(base_url).map_err(|e| {
            ApiError::Network(format!(
                "Invalid API base URL {:?} (an absolute http(s) URL is required): {}",
                base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send a request and return status plus raw body
    async fn send(&self, endpoint: &Endpoint) -> ApiResult<(u16, String)> {
        let url = endpoint.url(&self.base_url);
        let request = match endpoint.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };

        tracing::debug!(method = endpoint.method.as_str(), url = %url, "Sending request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Network(format!("Request timed out: {}", url))
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(unreadable_body)?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn list_activities(&self) -> ApiResult<Activities> {
        let (status, body) = self.send(&Endpoint::list_activities()).await?;
        read_json(status, &body)
    }

    async fn signup(&self, activity: &str, email: &str) -> ApiResult<String> {
        let (status, body) = self.send(&Endpoint::signup(activity, email)).await?;
        read_message(status, &body)
    }

    async fn unregister(&self, activity: &str, email: &str, username: &str) -> ApiResult<String> {
        let (status, body) = self
            .send(&Endpoint::unregister(activity, email, username))
            .await?;
        read_message(status, &body)
    }

    async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let (status, body) = self.send(&Endpoint::login(username, password)).await?;
        read_message(status, &body)
    }

    async fn logout(&self, username: &str) -> ApiResult<()> {
        let (status, body) = self.send(&Endpoint::logout(username)).await?;
        read_message(status, &body).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::{header, StatusCode},
        response::IntoResponse,
        routing::{delete, get, post},
        Json, Router,
    };
    use serde_json::json;
    use std::collections::HashMap;

    // Raw body: `json!` would sort the keys
    const ACTIVITIES_JSON: &str = r#"{
        "Chess Club": {
            "description": "Learn strategies",
            "schedule": "Fridays, 3:30 PM",
            "max_participants": 10,
            "participants": ["a@x.com"]
        },
        "Art Club": {
            "description": "Paint",
            "schedule": "Mondays",
            "max_participants": 2,
            "participants": []
        }
    }"#;

    async fn list() -> impl IntoResponse {
        ([(header::CONTENT_TYPE, "application/json")], ACTIVITIES_JSON)
    }

    async fn signup(
        Path(name): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        let email = query.get("email").cloned().unwrap_or_default();
        if name == "Chess Club" && email == "a@x.com" {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": "Student is already signed up" })),
            );
        }
        (
            StatusCode::OK,
            Json(json!({ "message": format!("Signed up {} for {}", email, name) })),
        )
    }

    async fn unregister(
        Path(name): Path<String>,
        Query(query): Query<HashMap<String, String>>,
    ) -> impl IntoResponse {
        if query.get("username").map(String::as_str) != Some("teacher") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Not authorized" })),
            );
        }
        let email = query.get("email").cloned().unwrap_or_default();
        (
            StatusCode::OK,
            Json(json!({ "message": format!("Unregistered {} from {}", email, name) })),
        )
    }

    async fn login(Query(query): Query<HashMap<String, String>>) -> impl IntoResponse {
        let ok = query.get("username").map(String::as_str) == Some("teacher")
            && query.get("password").map(String::as_str) == Some("secret");
        if ok {
            (StatusCode::OK, Json(json!({ "message": "Login successful" })))
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "detail": "Invalid username or password" })),
            )
        }
    }

    async fn logout() -> impl IntoResponse {
        Json(json!({ "message": "Logout successful" }))
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/activities", get(list))
            .route("/activities/:name/signup", post(signup))
            .route("/activities/:name/unregister", delete(unregister))
            .route("/login", post(login))
            .route("/logout", post(logout));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    async fn backend() -> HttpBackend {
        let config = ApiConfig {
            base_url: spawn_server().await,
            ..ApiConfig::default()
        };
        HttpBackend::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_list_activities_keeps_server_order() {
        let backend = backend().await;
        let activities = backend.list_activities().await.unwrap();

        assert_eq!(
            activities.names().collect::<Vec<_>>(),
            vec!["Chess Club", "Art Club"]
        );
        let chess = activities.get("Chess Club").unwrap();
        assert_eq!(chess.spots_left(), 9);
        assert_eq!(chess.details.participants, vec!["a@x.com"]);
    }

    #[tokio::test]
    async fn test_signup_success_and_rejection() {
        let backend = backend().await;

        let message = backend.signup("Art Club", "b@x.com").await.unwrap();
        assert_eq!(message, "Signed up b@x.com for Art Club");

        let err = backend.signup("Chess Club", "a@x.com").await.unwrap_err();
        assert_eq!(err.detail(), Some("Student is already signed up"));
    }

    #[tokio::test]
    async fn test_unregister_passes_username() {
        let backend = backend().await;

        let message = backend
            .unregister("Chess Club", "a@x.com", "teacher")
            .await
            .unwrap();
        assert_eq!(message, "Unregistered a@x.com from Chess Club");

        let err = backend
            .unregister("Chess Club", "a@x.com", "someone")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 401, .. }));
    }

    #[tokio::test]
    async fn test_login_and_logout() {
        let backend = backend().await;

        assert_eq!(
            backend.login("teacher", "secret").await.unwrap(),
            "Login successful"
        );
        let err = backend.login("teacher", "wrong").await.unwrap_err();
        assert_eq!(err.detail(), Some("Invalid username or password"));

        backend.logout("teacher").await.unwrap();
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let err = HttpBackend::new(&ApiConfig::default()).err().unwrap();
        assert!(err.to_string().contains("Invalid API base URL"));

        let relative = ApiConfig {
            base_url: "/api".to_string(),
            ..ApiConfig::default()
        };
        assert!(HttpBackend::new(&relative).is_err());
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        // Bind then drop to get a port nothing listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = ApiConfig {
            base_url: format!("http://{}/", addr),
            ..ApiConfig::default()
        };
        let backend = HttpBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), format!("http://{}", addr));

        let err = backend.list_activities().await.unwrap_err();
        assert!(err.is_transport());
    }
}
