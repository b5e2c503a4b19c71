//! Error Types
//!
//! Errors raised by the backend contract, the session store and the
//! controller actions. Every error is terminal for the single user action
//! that produced it; none of them is fatal to the view.

use thiserror::Error;

/// Errors returned by a [`Backend`](crate::api::Backend) call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request could not complete
    #[error("Network error: {0}")]
    Network(String),

    /// The response body could not be decoded
    #[error("Parse error: {0}")]
    Decode(String),

    /// The backend answered with a non-success status
    #[error("Rejected with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Rejected { status: u16, detail: Option<String> },
}

impl ApiError {
    /// Server-provided detail text, if the backend sent one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True for failures where no usable response arrived
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Decode(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

/// Result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from constructing a [`Session`](crate::session::Session)
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session identity must not be empty")]
    EmptyIdentity,
}

/// Errors from a [`SessionStore`](crate::session::SessionStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// The storage backend is not reachable (e.g. storage disabled in the browser)
    #[error("Session storage unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Errors surfaced by a controller action
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Unregister attempted with no active session
    #[error("An active session is required")]
    SessionRequired,

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Rejected with status 400: Student is already signed up"
        );

        let err = ApiError::Rejected { status: 500, detail: None };
        assert_eq!(err.to_string(), "Rejected with status 500: no detail");
    }

    #[test]
    fn test_detail_only_for_rejections() {
        let rejected = ApiError::Rejected {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        };
        assert_eq!(rejected.detail(), Some("Invalid credentials"));
        assert!(!rejected.is_transport());

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.detail(), None);
        assert!(network.is_transport());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let api_err: ApiError = json_err.into();
        assert!(matches!(api_err, ApiError::Decode(_)));
    }
}
