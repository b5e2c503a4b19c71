//! Transient Messages
//!
//! Status text shown after a user action, plus the fixed fallback texts
//! used when the backend gives no detail.

use crate::error::{ActionError, ApiError};

/// Shown when a rejection carries no usable detail
pub const GENERIC_REJECTION: &str = "An error occurred";
pub const LOGIN_REJECTED: &str = "Login failed";
pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const SESSION_REQUIRED: &str = "You must be logged in as a teacher to unregister students";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Banner style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// CSS class of the message element
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// A transient status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub severity: Severity,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            severity: Severity::Error,
        }
    }

    /// Error banner for a failed action
    ///
    /// Rejections show the server detail (or `rejected_fallback`);
    /// transport and decode failures show `transport_fallback`.
    pub fn for_error(err: &ActionError, rejected_fallback: &str, transport_fallback: &str) -> Self {
        let text = match err {
            ActionError::Api(ApiError::Rejected { detail, .. }) => {
                detail.clone().unwrap_or_else(|| rejected_fallback.to_string())
            }
            ActionError::Api(_) => transport_fallback.to_string(),
            ActionError::SessionRequired => SESSION_REQUIRED.to_string(),
            ActionError::Session(_) => rejected_fallback.to_string(),
        };
        Self::error(text)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_uses_detail() {
        let err = ActionError::Api(ApiError::Rejected {
            status: 401,
            detail: Some("Invalid credentials".to_string()),
        });
        let banner = Banner::for_error(&err, LOGIN_REJECTED, LOGIN_FAILED);
        assert_eq!(banner, Banner::error("Invalid credentials"));
    }

    #[test]
    fn test_rejection_without_detail_uses_fallback() {
        let err = ActionError::Api(ApiError::Rejected { status: 500, detail: None });
        let banner = Banner::for_error(&err, GENERIC_REJECTION, SIGNUP_FAILED);
        assert_eq!(banner.text, "An error occurred");
    }

    #[test]
    fn test_transport_failure_uses_retry_text() {
        let err = ActionError::Api(ApiError::Decode("expected value".to_string()));
        let banner = Banner::for_error(&err, GENERIC_REJECTION, UNREGISTER_FAILED);
        assert_eq!(banner.text, "Failed to unregister. Please try again.");
        assert!(banner.is_error());
        assert_eq!(banner.severity.class(), "error");
    }
}
