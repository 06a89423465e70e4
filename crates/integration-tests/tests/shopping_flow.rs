//! Full shopping session: browse, build a cart, authenticate, check out.

#![allow(clippy::unwrap_used)]

use luxe_core::PaymentMethod;
use luxe_integration_tests::{customer_session, delivery_address, fresh_session, product};
use luxe_storefront::error::AppError;
use luxe_storefront::nav::Page;
use rust_decimal::dec;

#[test]
fn same_variant_adds_merge_into_one_line() {
    let mut state = fresh_session();

    state
        .add_to_cart(&product("1"), 2, Some("Red"), Some("M"))
        .unwrap();
    state
        .add_to_cart(&product("1"), 1, Some("Red"), Some("M"))
        .unwrap();

    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart().lines()[0].quantity, 3);

    // A different variant of the same product appends a second line
    state
        .add_to_cart(&product("1"), 1, Some("Black"), Some("M"))
        .unwrap();
    assert_eq!(state.cart().len(), 2);
}

#[test]
fn totals_above_threshold_ship_free() {
    let mut state = fresh_session();
    state
        .add_to_cart(&product("1"), 3, Some("Red"), Some("M"))
        .unwrap();

    let totals = state.cart_totals();
    assert_eq!(totals.subtotal, dec!(8997));
    assert_eq!(totals.shipping, dec!(0));
    assert_eq!(totals.tax, dec!(1619.46));
    assert_eq!(totals.total, dec!(10616.46));
}

#[test]
fn totals_below_threshold_pay_flat_fee() {
    let mut state = fresh_session();
    state.add_to_cart(&product("1"), 1, None, None).unwrap();

    let totals = state.cart_totals();
    assert_eq!(totals.subtotal, dec!(2999));
    assert_eq!(totals.shipping, dec!(100));
    assert_eq!(totals.tax, dec!(539.82));
    assert_eq!(totals.total, dec!(3638.82));
}

#[test]
fn update_quantity_clamps_to_one_and_never_removes() {
    let mut state = fresh_session();
    state.add_to_cart(&product("2"), 2, None, None).unwrap();

    state.update_cart_quantity(&product("2"), 0);
    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.cart().lines()[0].quantity, 1);

    state.remove_from_cart(&product("2"));
    assert!(state.cart().is_empty());
}

#[test]
fn guest_checkout_redirects_to_login_with_cart_intact() {
    let mut state = fresh_session();
    state.add_to_cart(&product("1"), 1, None, None).unwrap();

    let result = state.begin_checkout();
    assert!(matches!(result, Err(AppError::LoginRequired(_))));
    assert_eq!(state.page(), Page::Login);
    assert_eq!(state.cart().len(), 1);
}

#[test]
fn placed_order_snapshots_totals_and_clears_cart() {
    let mut state = customer_session();
    state
        .add_to_cart(&product("1"), 3, Some("Red"), Some("M"))
        .unwrap();
    state.begin_checkout().unwrap();

    let totals = state.cart_totals();
    let order = state
        .place_order(delivery_address(), PaymentMethod::Card)
        .unwrap();

    assert_eq!(order.total, totals.total);
    assert_eq!(order.items.len(), 1);
    assert!(order.id.as_str().starts_with("ORD-"));
    assert!(state.cart().is_empty());
    assert_eq!(state.page(), Page::Home);
}

#[test]
fn empty_cart_cannot_be_checked_out() {
    let mut state = customer_session();
    state.begin_checkout().unwrap();

    let result = state.place_order(delivery_address(), PaymentMethod::Cod);
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[test]
fn incomplete_address_aborts_without_losing_the_cart() {
    let mut state = customer_session();
    state.add_to_cart(&product("4"), 1, None, None).unwrap();
    state.begin_checkout().unwrap();

    let mut address = delivery_address();
    address.pincode = String::new();
    let result = state.place_order(address, PaymentMethod::Upi);

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(state.cart().len(), 1);
    assert_eq!(state.page(), Page::Checkout);
}
