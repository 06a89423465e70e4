//! User domain types.
//!
//! Users are created by the mock login/signup flow and destroyed on
//! logout. There are no credentials to store; see
//! [`crate::services::auth`].

use serde::{Deserialize, Serialize};

use luxe_core::{Email, UserId, UserRole};

/// A storefront user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// A saved user address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}
