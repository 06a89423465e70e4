//! Wishlist with set semantics keyed by product id.

use serde::{Deserialize, Serialize};

use luxe_core::ProductId;

use crate::models::Product;

/// The saved-for-later product set.
///
/// Insertion order is preserved for display; membership is keyed by
/// product id, so no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    entries: Vec<Product>,
}

/// Result of a [`Wishlist::toggle`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl Wishlist {
    /// An empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Restore a wishlist from persisted entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Product>) -> Self {
        Self { entries }
    }

    /// The saved products, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the wishlist is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the wishlist contains `product_id`.
    #[must_use]
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.entries.iter().any(|p| &p.id == product_id)
    }

    /// Add the product if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) -> ToggleOutcome {
        if self.remove(&product.id) {
            ToggleOutcome::Removed
        } else {
            self.entries.push(product.clone());
            ToggleOutcome::Added
        }
    }

    /// Remove the product with `product_id`. Returns `true` if it was
    /// present.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|p| &p.id != product_id);
        self.entries.len() != before
    }
}
