//! User-facing notification values.
//!
//! The storefront core emits notification *requests*; rendering them
//! (toasts, terminal output) is the presentation layer's concern.

use serde::{Deserialize, Serialize};

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A transient user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    /// Short headline (e.g., "Added to cart!").
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
}

impl Notification {
    /// A success notification with a description.
    #[must_use]
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// A success notification without a description.
    #[must_use]
    pub fn success_brief(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            title: title.into(),
            description: None,
        }
    }

    /// An informational notification.
    #[must_use]
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// An error notification with a description.
    #[must_use]
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    /// An error notification without a description.
    #[must_use]
    pub fn error_brief(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            title: title.into(),
            description: None,
        }
    }
}
