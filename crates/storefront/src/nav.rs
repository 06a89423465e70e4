//! Navigation guard for role-gated destinations.
//!
//! Given a requested destination and the current session, decides whether
//! to permit navigation, redirect to login, or deny. The guard itself is
//! pure; applying the outcome (and resetting page-scoped transient state)
//! is [`crate::state::AppState::navigate`]'s job.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// The storefront destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    Products,
    ProductDetails,
    Cart,
    Checkout,
    Login,
    Signup,
    Profile,
    Admin,
    Wishlist,
}

impl Page {
    /// Destinations that require a logged-in user.
    #[must_use]
    pub const fn requires_auth(&self) -> bool {
        matches!(self, Self::Profile | Self::Admin)
    }

    /// Destinations that additionally require the admin role.
    #[must_use]
    pub const fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Home => "home",
            Self::Products => "products",
            Self::ProductDetails => "product-details",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Login => "login",
            Self::Signup => "signup",
            Self::Profile => "profile",
            Self::Admin => "admin",
            Self::Wishlist => "wishlist",
        };
        write!(f, "{name}")
    }
}

/// Decision for a requested navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Navigation proceeds to the requested page.
    Permitted,
    /// The user must log in first; navigation lands on the login page.
    RedirectToLogin,
    /// Insufficient role; the current page does not change.
    Denied,
}

/// Decide whether `session` may navigate to `destination`.
#[must_use]
pub fn guard(destination: Page, session: Option<&User>) -> NavOutcome {
    match session {
        None if destination.requires_auth() => NavOutcome::RedirectToLogin,
        Some(user) if destination.requires_admin() && !user.role.is_admin() => NavOutcome::Denied,
        _ => NavOutcome::Permitted,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use luxe_core::{Email, UserId, UserRole};

    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: UserId::new("user-1"),
            name: "demo".to_owned(),
            email: Email::parse("demo@example.com").unwrap(),
            role,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn test_public_pages_open_to_guests() {
        for page in [
            Page::Home,
            Page::Products,
            Page::ProductDetails,
            Page::Cart,
            Page::Login,
            Page::Signup,
            Page::Wishlist,
        ] {
            assert_eq!(guard(page, None), NavOutcome::Permitted, "{page}");
        }
    }

    #[test]
    fn test_profile_requires_login() {
        assert_eq!(guard(Page::Profile, None), NavOutcome::RedirectToLogin);
        let customer = user(UserRole::Customer);
        assert_eq!(guard(Page::Profile, Some(&customer)), NavOutcome::Permitted);
    }

    #[test]
    fn test_admin_requires_admin_role() {
        assert_eq!(guard(Page::Admin, None), NavOutcome::RedirectToLogin);

        let customer = user(UserRole::Customer);
        assert_eq!(guard(Page::Admin, Some(&customer)), NavOutcome::Denied);

        let admin = user(UserRole::Admin);
        assert_eq!(guard(Page::Admin, Some(&admin)), NavOutcome::Permitted);
    }

    #[test]
    fn test_page_serde_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Page::ProductDetails).unwrap(),
            "\"product-details\""
        );
    }
}
