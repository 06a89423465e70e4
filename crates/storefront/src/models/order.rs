//! Order domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use luxe_core::{OrderId, OrderStatus, PaymentMethod, UserId};

use super::cart::CartLine;

/// A placed order: a snapshot of cart lines at checkout time.
///
/// Immutable after placement. Status values beyond `Pending` exist for
/// the historical orders shown on the profile and admin pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<CartLine>,
    /// Grand total (subtotal + shipping + tax), unrounded.
    pub total: Decimal,
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
}

/// The address an order ships to.
///
/// All fields are required at checkout; see
/// [`crate::checkout::validate_address`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryAddress {
    pub name: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}
