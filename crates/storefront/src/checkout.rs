//! Mock checkout: address validation and order placement.
//!
//! Placing an order snapshots the cart into an [`Order`] and clears it.
//! This is a simulated side effect, not a transactional guarantee; no
//! payment is processed and nothing is sent anywhere.

use chrono::{Datelike, Utc};
use rand::Rng;
use tracing::info;

use luxe_core::{OrderId, OrderStatus, PaymentMethod};

use crate::cart::Cart;
use crate::config::StoreConfig;
use crate::error::{AppError, Result};
use crate::models::{DeliveryAddress, Order, User};

/// Validate the checkout address form.
///
/// Every field is required; the first missing field aborts the operation
/// with a user-facing validation message.
///
/// # Errors
///
/// Returns `AppError::Validation` naming the missing field.
pub fn validate_address(address: &DeliveryAddress) -> Result<()> {
    let fields = [
        (address.name.as_str(), "name"),
        (address.phone.as_str(), "phone number"),
        (address.street.as_str(), "street address"),
        (address.city.as_str(), "city"),
        (address.state.as_str(), "state"),
        (address.pincode.as_str(), "pincode"),
    ];
    for (value, label) in fields {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("Please enter your {label}")));
        }
    }
    Ok(())
}

/// Place an order from the cart contents.
///
/// Snapshots the lines and computed total into a `Pending` order and
/// clears the cart. Totals are derived by [`crate::cart::compute_totals`]
/// at placement time and stored unrounded.
///
/// # Errors
///
/// Returns `AppError::Validation` if the cart is empty or the address is
/// incomplete.
pub fn place_order(
    cart: &mut Cart,
    user: &User,
    address: DeliveryAddress,
    payment_method: PaymentMethod,
    config: &StoreConfig,
) -> Result<Order> {
    if cart.is_empty() {
        return Err(AppError::Validation(
            "Your cart is empty".to_owned(),
        ));
    }
    validate_address(&address)?;

    let totals = cart.totals(config);
    let order = Order {
        id: generate_order_id(),
        user_id: user.id.clone(),
        items: cart.lines().to_vec(),
        total: totals.total,
        status: OrderStatus::Pending,
        date: Utc::now(),
        delivery_address: address,
        payment_method,
    };

    cart.clear();
    info!(
        order_id = %order.id,
        total = %order.total,
        payment_method = %order.payment_method,
        "Order placed"
    );

    Ok(order)
}

/// Generate an order ID of the form `ORD-<year>-<4 digits>`.
fn generate_order_id() -> OrderId {
    let year = Utc::now().year();
    let suffix: u16 = rand::rng().random_range(0..10_000);
    OrderId::new(format!("ORD-{year}-{suffix:04}"))
}
