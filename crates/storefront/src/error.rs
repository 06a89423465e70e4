//! Unified application error handling.
//!
//! Provides a unified `AppError` type covering the three recoverable
//! failure classes of the storefront: validation (operation aborted with a
//! user-facing message), authorization (redirect with a user-facing
//! message), and persistence (logged, never surfaced). Nothing in this
//! application is fatal; there is no backend call to fail.

use thiserror::Error;

use crate::services::auth::AuthError;
use crate::store::StoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form or input field failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// The user must be logged in for the requested operation.
    #[error("Login required: {0}")]
    LoginRequired(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Key-value persistence failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl AppError {
    /// The message shown to the user for this error.
    ///
    /// Persistence failures are internal: they are logged at the call
    /// site and deliberately get a generic message in the unlikely case
    /// one reaches the presentation layer.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(msg) => msg.clone(),
            Self::Auth(err) => err.user_message(),
            Self::LoginRequired(_) => "You need to be logged in to access this page".to_owned(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Store(_) => "Something went wrong".to_owned(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
