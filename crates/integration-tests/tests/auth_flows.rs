//! Mock authentication flows through the application state.

#![allow(clippy::unwrap_used)]

use luxe_core::UserRole;
use luxe_integration_tests::fresh_session;
use luxe_storefront::error::AppError;
use luxe_storefront::nav::{NavOutcome, Page};
use luxe_storefront::notify::Severity;

#[test]
fn login_derives_profile_from_the_email() {
    let mut state = fresh_session();
    state.login("arjun.mehta@example.com", "secret1").unwrap();

    let user = state.session().unwrap();
    assert_eq!(user.name, "arjun.mehta");
    assert_eq!(user.role, UserRole::Customer);
    assert_eq!(state.page(), Page::Home);
}

#[test]
fn short_password_is_rejected_with_form_copy() {
    let mut state = fresh_session();
    let result = state.login("priya@example.com", "12345");

    assert!(matches!(result, Err(AppError::Auth(_))));
    assert!(!state.is_authenticated());

    let notifications = state.take_notifications();
    assert_eq!(notifications[0].severity, Severity::Error);
    assert_eq!(
        notifications[0].title,
        "Password must be at least 6 characters"
    );
}

#[test]
fn invalid_email_is_rejected() {
    let mut state = fresh_session();
    assert!(state.login("not an email", "secret1").is_err());
    assert!(state.login("", "secret1").is_err());
    assert!(!state.is_authenticated());
}

#[test]
fn signup_requires_matching_passwords() {
    let mut state = fresh_session();
    let result = state.signup(
        "Priya",
        "priya@example.com",
        "secret1",
        "secret2",
        UserRole::Customer,
    );

    assert!(matches!(result, Err(AppError::Auth(_))));
    let notifications = state.take_notifications();
    assert_eq!(notifications[0].title, "Passwords do not match!");
}

#[test]
fn signup_creates_a_session_with_the_chosen_role() {
    let mut state = fresh_session();
    state
        .signup(
            "  Priya Sharma  ",
            "priya@example.com",
            "secret1",
            "secret1",
            UserRole::Customer,
        )
        .unwrap();

    let user = state.session().unwrap();
    assert_eq!(user.name, "Priya Sharma");
    assert!(user.id.as_str().starts_with("user-"));
    assert_eq!(state.page(), Page::Home);
}

#[test]
fn admin_signup_lands_on_the_dashboard() {
    let mut state = fresh_session();
    state
        .signup(
            "Store Admin",
            "ops@luxe.example",
            "secret1",
            "secret1",
            UserRole::Admin,
        )
        .unwrap();
    assert_eq!(state.page(), Page::Admin);
}

#[test]
fn logout_returns_home_and_clears_the_session() {
    let mut state = fresh_session();
    state.login("priya@example.com", "secret1").unwrap();
    state.navigate(Page::Profile, None);
    state.logout();

    assert!(!state.is_authenticated());
    assert_eq!(state.page(), Page::Home);
    assert_eq!(
        state.navigate(Page::Profile, None),
        NavOutcome::RedirectToLogin
    );
}
