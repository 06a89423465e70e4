//! End-to-end tests for the LUXE storefront.
//!
//! Each test drives a full [`AppState`] over an in-memory (or temporary
//! file-backed) store, exercising the same operation sequences the UI
//! shell performs: browse, add to cart, authenticate, check out, and
//! restart with persisted state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use luxe_core::ProductId;
use luxe_storefront::config::StoreConfig;
use luxe_storefront::models::DeliveryAddress;
use luxe_storefront::state::AppState;
use luxe_storefront::store::{KvStore, MemoryStore};

/// A fresh session over an empty in-memory store.
#[must_use]
pub fn fresh_session() -> AppState<MemoryStore> {
    AppState::new(StoreConfig::default(), MemoryStore::new())
}

/// A session restored from an existing store (simulates an app restart).
pub fn restored_session<S: KvStore>(store: S) -> AppState<S> {
    AppState::new(StoreConfig::default(), store)
}

/// A session with a customer already logged in.
///
/// # Panics
///
/// Panics if the fixture login fails.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn customer_session() -> AppState<MemoryStore> {
    let mut state = fresh_session();
    state.login("priya@example.com", "secret1").unwrap();
    state.take_notifications();
    state
}

/// A product id from the fixture catalog.
#[must_use]
pub fn product(id: &str) -> ProductId {
    ProductId::new(id)
}

/// A complete delivery address for checkout tests.
#[must_use]
pub fn delivery_address() -> DeliveryAddress {
    DeliveryAddress {
        name: "Priya Sharma".to_owned(),
        phone: "9876543210".to_owned(),
        street: "14 MG Road".to_owned(),
        city: "Bengaluru".to_owned(),
        state: "Karnataka".to_owned(),
        pincode: "560001".to_owned(),
    }
}
