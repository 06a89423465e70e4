//! Mock authentication service.
//!
//! Validates the login/signup forms and fabricates users. There is no
//! backend and no credential store: login accepts any password of valid
//! length, derives the display name from the email local part, and grants
//! the admin role to any email containing `"admin"`. This is demo
//! behavior by construction.

mod error;

pub use error::AuthError;

use tracing::info;

use luxe_core::{Email, UserId, UserRole};

use crate::models::User;

/// Minimum password length, matching the auth form.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Mock authentication operations.
///
/// Stateless: each call validates its inputs and returns a freshly
/// created [`User`]. Session handling lives in [`crate::state`].
pub struct AuthService;

impl AuthService {
    /// Mock login with email and password.
    ///
    /// The returned user's name is the email local part; the role is
    /// `Admin` iff the email contains `"admin"`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for empty inputs,
    /// `AuthError::InvalidEmail` for a malformed email, and
    /// `AuthError::PasswordTooShort` for a short password.
    pub fn login(email: &str, password: &str) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField("email and password".to_owned()));
        }
        let email = Email::parse(email)?;
        validate_password(password)?;

        let role = role_for_email(&email);
        let user = User {
            id: UserId::generate(),
            name: email.local_part().to_owned(),
            email,
            role,
            phone: None,
            address: None,
        };
        info!(user_id = %user.id, role = %user.role, "Mock login");
        Ok(user)
    }

    /// Mock signup with name, email, password, and chosen role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` for an empty name,
    /// `AuthError::PasswordMismatch` when the confirmation differs, plus
    /// the same email/password validation as [`AuthService::login`].
    pub fn signup(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
        role: UserRole,
    ) -> Result<User, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingField("email and password".to_owned()));
        }
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("name".to_owned()));
        }
        let email = Email::parse(email)?;
        validate_password(password)?;
        if password != confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let user = User {
            id: UserId::generate(),
            name: name.trim().to_owned(),
            email,
            role,
            phone: None,
            address: None,
        };
        info!(user_id = %user.id, role = %user.role, "Mock signup");
        Ok(user)
    }
}

/// Validate password length against the form minimum.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    Ok(())
}

/// Admin role for any email containing "admin", customer otherwise.
fn role_for_email(email: &Email) -> UserRole {
    if email.as_str().contains("admin") {
        UserRole::Admin
    } else {
        UserRole::Customer
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_derives_name_and_customer_role() {
        let user = AuthService::login("priya@example.com", "secret1").unwrap();
        assert_eq!(user.name, "priya");
        assert_eq!(user.role, UserRole::Customer);
        assert_eq!(user.email.as_str(), "priya@example.com");
    }

    #[test]
    fn test_login_grants_admin_for_admin_email() {
        let user = AuthService::login("admin@luxe.example", "secret1").unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        assert!(matches!(
            AuthService::login("", "secret1"),
            Err(AuthError::MissingField(_))
        ));
        assert!(matches!(
            AuthService::login("a@b.c", ""),
            Err(AuthError::MissingField(_))
        ));
    }

    #[test]
    fn test_login_rejects_invalid_email() {
        let err = AuthService::login("not-an-email", "secret1").unwrap_err();
        assert!(matches!(err, AuthError::InvalidEmail(_)));
        assert_eq!(err.user_message(), "Please enter a valid email address");
    }

    #[test]
    fn test_login_rejects_short_password() {
        assert!(matches!(
            AuthService::login("a@b.c", "12345"),
            Err(AuthError::PasswordTooShort { min: 6 })
        ));
    }

    #[test]
    fn test_signup_requires_name() {
        let err =
            AuthService::signup("  ", "a@b.c", "secret1", "secret1", UserRole::Customer)
                .unwrap_err();
        assert!(matches!(err, AuthError::MissingField(_)));
        assert_eq!(err.user_message(), "Please enter your name");
    }

    #[test]
    fn test_signup_requires_matching_confirmation() {
        assert!(matches!(
            AuthService::signup("Priya", "a@b.c", "secret1", "secret2", UserRole::Customer),
            Err(AuthError::PasswordMismatch)
        ));
    }

    #[test]
    fn test_signup_uses_chosen_role() {
        let user =
            AuthService::signup("Priya", "priya@b.c", "secret1", "secret1", UserRole::Admin)
                .unwrap();
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Priya");
    }

    #[test]
    fn test_signup_ids_are_unique() {
        let a = AuthService::signup("A", "a@b.c", "secret1", "secret1", UserRole::Customer)
            .unwrap();
        let b = AuthService::signup("B", "b@b.c", "secret1", "secret1", UserRole::Customer)
            .unwrap();
        assert_ne!(a.id, b.id);
    }
}
