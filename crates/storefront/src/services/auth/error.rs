//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during mock authentication.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] luxe_core::EmailError),

    /// A required form field is missing.
    #[error("missing field: {0}")]
    MissingField(String),

    /// Password too short.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum required length.
        min: usize,
    },

    /// Signup password confirmation does not match.
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl AuthError {
    /// The message shown to the user for this error, matching the auth
    /// form copy.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(_) => "Please enter a valid email address".to_owned(),
            Self::MissingField(field) => format!("Please enter your {field}"),
            Self::PasswordTooShort { min } => {
                format!("Password must be at least {min} characters")
            }
            Self::PasswordMismatch => "Passwords do not match!".to_owned(),
        }
    }
}
