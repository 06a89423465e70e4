//! Scripted walkthrough of a full shopping session.
//!
//! Runs against an in-memory store, so it leaves no state behind and can
//! be re-run freely.

use luxe_core::{PaymentMethod, ProductId};
use luxe_storefront::catalog::{self, FacetSelection, SortKey};
use luxe_storefront::config::StoreConfig;
use luxe_storefront::models::DeliveryAddress;
use luxe_storefront::nav::Page;
use luxe_storefront::state::AppState;
use luxe_storefront::store::MemoryStore;

use super::{flush_notifications, money};

/// Walk through browsing, cart building, auth, and checkout.
pub fn run(config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = AppState::new(config.clone(), MemoryStore::new());

    println!("== Featured on the home page ==");
    for product in catalog::featured(state.products()) {
        println!("[{}] {} - {}", product.id, product.name, money(product.price));
    }
    println!();

    println!("== Browse the catalog ==");
    let listing = state.listing(&FacetSelection::default(), SortKey::PriceLow);
    for product in listing.iter().take(5) {
        println!("[{}] {} - {}", product.id, product.name, money(product.price));
    }
    println!("...{} products total\n", listing.len());

    println!("== Add to cart (same variant twice merges) ==");
    let dress = ProductId::new("1");
    state.add_to_cart(&dress, 2, Some("Red"), Some("M"))?;
    state.add_to_cart(&dress, 1, Some("Red"), Some("M"))?;
    state.add_to_cart(&ProductId::new("6"), 1, None, None)?;
    flush_notifications(&mut state);
    let totals = state.cart_totals();
    println!(
        "{} line(s); subtotal {}, shipping {}, tax {}, total {}\n",
        state.cart().len(),
        money(totals.subtotal),
        money(totals.shipping),
        money(totals.tax),
        money(totals.total),
    );

    println!("== Wishlist ==");
    state.toggle_wishlist(&ProductId::new("3"))?;
    flush_notifications(&mut state);
    println!();

    println!("== Checkout requires login ==");
    if state.begin_checkout().is_err() {
        flush_notifications(&mut state);
        println!("Redirected to {}\n", state.page());
    }

    println!("== Log in and place the order ==");
    state.login("priya@example.com", "secret1")?;
    state.begin_checkout()?;
    let address = DeliveryAddress {
        name: "Priya Sharma".to_owned(),
        phone: "9876543210".to_owned(),
        street: "14 MG Road".to_owned(),
        city: "Bengaluru".to_owned(),
        state: "Karnataka".to_owned(),
        pincode: "560001".to_owned(),
    };
    let order = state.place_order(address, PaymentMethod::Upi)?;
    flush_notifications(&mut state);
    println!(
        "Order {}: {} item(s), total {}",
        order.id,
        order.items.len(),
        money(order.total),
    );
    println!(
        "Cart is now empty: {}; back on the {} page\n",
        state.cart().is_empty(),
        state.page(),
    );

    println!("== Role gating ==");
    state.navigate(Page::Admin, None);
    flush_notifications(&mut state);
    state.logout();
    state.login("admin@luxe.example", "secret1")?;
    flush_notifications(&mut state);
    println!("Now on the {} page", state.page());

    Ok(())
}
