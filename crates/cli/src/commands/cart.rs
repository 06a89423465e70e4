//! Cart and wishlist commands.

use luxe_core::ProductId;
use luxe_storefront::error::Result;
use luxe_storefront::state::AppState;
use luxe_storefront::store::KvStore;

/// Print cart lines and derived totals.
pub fn show<S: KvStore>(state: &AppState<S>) {
    if state.cart().is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in state.cart().lines() {
        let mut variant = Vec::new();
        if !line.selected_color.is_empty() {
            variant.push(line.selected_color.clone());
        }
        if !line.selected_size.is_empty() {
            variant.push(line.selected_size.clone());
        }
        let variant = if variant.is_empty() {
            String::new()
        } else {
            format!(" ({})", variant.join(", "))
        };
        println!(
            "[{}] {}{} x{} = {}",
            line.product.id,
            line.product.name,
            variant,
            line.quantity,
            super::money(line.line_total()),
        );
    }

    let totals = state.cart_totals();
    println!("Subtotal: {}", super::money(totals.subtotal));
    if totals.shipping.is_zero() {
        println!("Shipping: FREE");
    } else {
        println!("Shipping: {}", super::money(totals.shipping));
    }
    println!("Tax:      {}", super::money(totals.tax));
    println!("Total:    {}", super::money(totals.total));
}

/// Add a product to the cart.
pub fn add<S: KvStore>(
    state: &mut AppState<S>,
    id: &str,
    quantity: u32,
    color: Option<&str>,
    size: Option<&str>,
) -> Result<()> {
    state.add_to_cart(&ProductId::new(id), quantity, color, size)
}

/// Set the quantity for a product's cart lines.
pub fn update<S: KvStore>(state: &mut AppState<S>, id: &str, quantity: u32) {
    state.update_cart_quantity(&ProductId::new(id), quantity);
    show(state);
}

/// Remove a product from the cart.
pub fn remove<S: KvStore>(state: &mut AppState<S>, id: &str) {
    state.remove_from_cart(&ProductId::new(id));
}

/// Print the wishlist.
pub fn show_wishlist<S: KvStore>(state: &AppState<S>) {
    if state.wishlist().is_empty() {
        println!("Your wishlist is empty.");
        return;
    }
    for product in state.wishlist().entries() {
        println!(
            "[{}] {} - {}",
            product.id,
            product.name,
            super::money(product.price),
        );
    }
}

/// Toggle wishlist membership for a product.
pub fn toggle_wishlist<S: KvStore>(state: &mut AppState<S>, id: &str) -> Result<()> {
    state.toggle_wishlist(&ProductId::new(id))
}

/// Remove a product from the wishlist.
pub fn remove_from_wishlist<S: KvStore>(state: &mut AppState<S>, id: &str) {
    state.remove_from_wishlist(&ProductId::new(id));
}
