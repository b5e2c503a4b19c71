//! HTTP API Client
//!
//! [`Backend`] over `fetch`, via gloo-net.

use async_trait::async_trait;
use gloo_net::http::Request;
use signup_desk::api::{read_json, read_message, unreadable_body, Backend, Endpoint, Method};
use signup_desk::{Activities, ApiError, ApiResult};

/// Local storage key for an API base URL override
pub const API_URL_KEY: &str = "signup_desk_api_url";

/// Get the API base URL from local storage or use the configured default
pub fn get_api_base(default: &str) -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| default.to_string());

    normalize_base(&url)
}

/// Remove trailing slashes so endpoint paths join cleanly
fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Activity service client running in the browser
pub struct GlooBackend {
    base_url: String,
}

impl GlooBackend {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    async fn send(&self, endpoint: &Endpoint) -> ApiResult<(u16, String)> {
        let url = endpoint.url(&self.base_url);
        let request = match endpoint.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };

        tracing::debug!(method = endpoint.method.as_str(), url = %url, "Sending request");

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(unreadable_body)?;

        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl Backend for GlooBackend {
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
