//! Command implementations.

pub mod cart;
pub mod catalog;
pub mod demo;
pub mod session;

use luxe_core::{CurrencyCode, Price};
use luxe_storefront::config::StoreConfig;
use luxe_storefront::notify::Severity;
use luxe_storefront::state::AppState;
use luxe_storefront::store::{FileStore, KvStore, MemoryStore};
use rust_decimal::Decimal;

/// Build the application state over the configured store.
pub fn open_state(config: StoreConfig, ephemeral: bool) -> AppState<Box<dyn KvStore>> {
    let store: Box<dyn KvStore> = if ephemeral {
        Box::new(MemoryStore::new())
    } else {
        Box::new(FileStore::new(config.state_dir.clone()))
    };
    AppState::new(config, store)
}

/// Format an amount in the store currency (e.g., `₹2,999.00`).
pub fn money(amount: Decimal) -> String {
    Price::new(amount, CurrencyCode::INR).to_string()
}

/// Print and drain the pending notifications.
pub fn flush_notifications<S: KvStore>(state: &mut AppState<S>) {
    for notification in state.take_notifications() {
        let tag = match notification.severity {
            Severity::Success => "ok",
            Severity::Info => "info",
            Severity::Error => "error",
        };
        match notification.description {
            Some(description) => println!("[{tag}] {} - {description}", notification.title),
            None => println!("[{tag}] {}", notification.title),
        }
    }
}
