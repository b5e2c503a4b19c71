//! Backend REST Contract
//!
//! The activity service endpoints consumed by the client.
//!
//! # Endpoints
//!
//! - `GET /activities` - Full activity collection
//! - `POST /activities/{name}/signup?email=` - Sign up
//! - `DELETE /activities/{name}/unregister?email=&username=` - Remove a participant
//! - `POST /login?username=&password=` - Authenticate a teacher
//! - `POST /logout?username=` - End the teacher session
//!
//! Mutating endpoints answer `{"message": ...}` on success and
//! `{"detail": ...}` on failure.

#[cfg(feature = "native")]
pub mod http;

#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};
use crate::models::{Activities, DetailBody, MessageBody};

/// The backend the controller talks to
///
/// Futures are `!Send`: the client runs on a single event loop.
#[async_trait(?Send)]
pub trait Backend {
    /// Fetch the full activity collection
    async fn list_activities(&self) -> ApiResult<Activities>;

    /// Register `email` for `activity`; returns the server message
    async fn signup(&self, activity: &str, email: &str) -> ApiResult<String>;

    /// Remove `email` from `activity` on behalf of `username`
    async fn unregister(&self, activity: &str, email: &str, username: &str) -> ApiResult<String>;

    /// Check teacher credentials; returns the server message
    async fn login(&self, username: &str, password: &str) -> ApiResult<String>;

    /// End the session for `username`
    async fn logout(&self, username: &str) -> ApiResult<()>;
}

/// HTTP method of an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

/// A concrete request target: method plus encoded path and query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    pub fn list_activities() -> Self {
        Self {
            method: Method::Get,
            path: "/activities".to_string(),
        }
    }

    pub fn signup(activity: &str, email: &str) -> Self {
        Self {
            method: Method::Post,
            path: format!(
                "/activities/{}/signup?email={}",
                urlencoding::encode(activity),
                urlencoding::encode(email)
            ),
        }
    }

    pub fn unregister(activity: &str, email: &str, username: &str) -> Self {
        Self {
            method: Method::Delete,
            path: format!(
                "/activities/{}/unregister?email={}&username={}",
                urlencoding::encode(activity),
                urlencoding::encode(email),
                urlencoding::encode(username)
            ),
        }
    }

    pub fn login(username: &str, password: &str) -> Self {
        Self {
            method: Method::Post,
            path: format!(
                "/login?username={}&password={}",
                urlencoding::encode(username),
                urlencoding::encode(password)
            ),
        }
    }

    pub fn logout(username: &str) -> Self {
        Self {
            method: Method::Post,
            path: format!("/logout?username={}", urlencoding::encode(username)),
        }
    }

    /// Absolute (or origin-relative, for an empty base) URL
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path)
    }
}

// ============ Response Interpretation ============

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decode a success body, or turn a failure status into `ApiError::Rejected`
pub fn read_json<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    if is_success(status) {
        Ok(serde_json::from_str(body)?)
    } else {
        Err(rejection(status, body)?)
    }
}

/// Interpret a `{message}` / `{detail}` response
pub fn read_message(status: u16, body: &str) -> ApiResult<String> {
    read_json::<MessageBody>(status, body).map(|b| b.message)
}

/// A response arrived but its body could not be read
///
/// Reported as a decode failure, not a transport one: the server answered.
pub fn unreadable_body(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(format!("Failed to read response body: {}", err))
}

/// Build the rejection for a non-success response
///
/// An undecodable failure body is a decode error, not a rejection.
fn rejection(status: u16, body: &str) -> ApiResult<ApiError> {
    let detail: DetailBody = serde_json::from_str(body)?;
    Ok(ApiError::Rejected {
        status,
        detail: detail.text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_path_encodes_segments() {
        let endpoint = Endpoint::signup("Chess Club", "a+b@x.com");
        assert_eq!(endpoint.method, Method::Post);
        assert_eq!(endpoint.path, "/activities/Chess%20Club/signup?email=a%2Bb%40x.com");
    }

    #[test]
    fn test_unregister_path() {
        let endpoint = Endpoint::unregister("Art/Design", "a@x.com", "mr teacher");
        assert_eq!(endpoint.method, Method::Delete);
        assert_eq!(
            endpoint.path,
            "/activities/Art%2FDesign/unregister?email=a%40x.com&username=mr%20teacher"
        );
    }

    #[test]
    fn test_login_and_logout_paths() {
        assert_eq!(
            Endpoint::login("teacher", "p&ss=1").path,
            "/login?username=teacher&password=p%26ss%3D1"
        );
        assert_eq!(Endpoint::logout("teacher").path, "/logout?username=teacher");
        assert_eq!(Endpoint::list_activities().method, Method::Get);
    }

    #[test]
    fn test_unreadable_body_is_decode_failure() {
        let err = unreadable_body("connection reset mid-body");
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().contains("connection reset mid-body"));
    }

    #[test]
    fn test_url_joins_base() {
        let endpoint = Endpoint::list_activities();
        assert_eq!(endpoint.url(""), "/activities");
        assert_eq!(endpoint.url("http://localhost:8000/"), "http://localhost:8000/activities");
    }

    #[test]
    fn test_read_message_success() {
        let message = read_message(200, r#"{"message": "Signed up a@x.com for Chess Club"}"#).unwrap();
        assert_eq!(message, "Signed up a@x.com for Chess Club");
    }

    #[test]
    fn test_read_message_rejection_with_detail() {
        let err = read_message(401, r#"{"detail": "Invalid credentials"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                status: 401,
                detail: Some("Invalid credentials".to_string())
            }
        );
    }

    #[test]
    fn test_read_message_rejection_without_detail() {
        let err = read_message(422, r#"{"detail": [{"msg": "field required"}]}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { status: 422, detail: None });
    }

    #[test]
    fn test_read_message_unparsable_bodies() {
        assert!(matches!(read_message(200, "<html>"), Err(ApiError::Decode(_))));
        assert!(matches!(read_message(502, "Bad Gateway"), Err(ApiError::Decode(_))));
        assert!(matches!(read_message(200, r#"{"detail": "x"}"#), Err(ApiError::Decode(_))));
    }
}
