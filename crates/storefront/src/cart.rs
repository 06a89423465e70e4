//! Shopping cart with line merging and derived pricing.
//!
//! Lines are keyed by (product id, color, size); adding the same key
//! increments quantity. Pricing is derived, never stored: subtotal is the
//! sum of line totals, shipping is waived at and above the free-shipping
//! threshold, tax is a fixed percentage of the subtotal.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use luxe_core::ProductId;

use crate::config::StoreConfig;
use crate::models::{CartLine, Product};

/// The active shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Derived pricing for a cart or order, unrounded.
///
/// Rounding happens only at display time via
/// [`luxe_core::format_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Restore a cart from persisted lines.
    #[must_use]
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not total quantity).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product to the cart.
    ///
    /// If a line with a matching (product id, color, size) key exists its
    /// quantity is increased by `quantity`; otherwise a new line is
    /// appended. Color and size default to the product's first listed
    /// option when unspecified. Quantities below 1 are treated as 1; no
    /// upper bound is enforced.
    pub fn add(
        &mut self,
        product: &Product,
        quantity: u32,
        color: Option<&str>,
        size: Option<&str>,
    ) {
        let quantity = quantity.max(1);
        let color = color
            .or_else(|| product.default_color())
            .unwrap_or_default()
            .to_owned();
        let size = size
            .or_else(|| product.default_size())
            .unwrap_or_default()
            .to_owned();

        if let Some(line) = self.lines.iter_mut().find(|line| {
            line.product.id == product.id
                && line.selected_color == color
                && line.selected_size == size
        }) {
            line.quantity += quantity;
            debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "Merged cart line"
            );
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
                selected_color: color,
                selected_size: size,
            });
            debug!(product_id = %product.id, quantity, "Appended cart line");
        }
    }

    /// Set the quantity of every line for `product_id`, clamped to a
    /// minimum of 1.
    ///
    /// This never removes a line, even for zero input; removal is a
    /// separate, explicit operation.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        let quantity = quantity.max(1);
        for line in self
            .lines
            .iter_mut()
            .filter(|line| &line.product.id == product_id)
        {
            line.quantity = quantity;
        }
    }

    /// Remove all lines for `product_id`, regardless of variant.
    ///
    /// Returns `true` if anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| &line.product.id != product_id);
        self.lines.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Compute derived pricing for the current lines.
    #[must_use]
    pub fn totals(&self, config: &StoreConfig) -> CartTotals {
        compute_totals(&self.lines, config)
    }
}

/// Derive {subtotal, shipping, tax, total} from a set of lines.
///
/// Pure function over the invariants:
/// - `subtotal = Σ line.product.price × line.quantity`
/// - `shipping = 0` when subtotal is at or above the free-shipping
///   threshold, else the flat fee
/// - `tax = subtotal × tax_rate`
/// - `total = subtotal + shipping + tax`
#[must_use]
pub fn compute_totals(lines: &[CartLine], config: &StoreConfig) -> CartTotals {
    let subtotal: Decimal = lines.iter().map(CartLine::line_total).sum();
    let shipping = if subtotal >= config.free_shipping_threshold {
        Decimal::ZERO
    } else {
        config.shipping_fee
    };
    let tax = subtotal * config.tax_rate;
    let total = subtotal + shipping + tax;

    CartTotals {
        subtotal,
        shipping,
        tax,
        total,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::fixtures;

    fn catalog_product(id: &str) -> Product {
        fixtures::products()
            .into_iter()
            .find(|p| p.id.as_str() == id)
            .unwrap()
    }

    fn priced_product(id: &str, price: Decimal) -> Product {
        let mut product = catalog_product("1");
        product.id = luxe_core::ProductId::new(id);
        product.price = price;
        product
    }

    #[test]
    fn test_add_merges_same_variant() {
        let product = catalog_product("1");
        let mut cart = Cart::new();
        cart.add(&product, 2, Some("Red"), Some("M"));
        cart.add(&product, 1, Some("Red"), Some("M"));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 3);
    }

    #[test]
    fn test_add_different_variant_appends() {
        let product = catalog_product("1");
        let mut cart = Cart::new();
        cart.add(&product, 2, Some("Red"), Some("M"));
        cart.add(&product, 1, Some("Blue"), Some("M"));

        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_add_defaults_to_first_listed_options() {
        let product = catalog_product("1");
        let mut cart = Cart::new();
        cart.add(&product, 1, None, None);

        let line = &cart.lines()[0];
        assert_eq!(line.selected_color, product.colors[0]);
        assert_eq!(line.selected_size, product.sizes[0]);

        // An explicit matching variant merges with the defaulted line
        cart.add(
            &product,
            1,
            product.default_color(),
            product.default_size(),
        );
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_update_quantity_clamps_to_one() {
        let product = catalog_product("1");
        let mut cart = Cart::new();
        cart.add(&product, 5, None, None);

        cart.update_quantity(&product.id, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);

        cart.update_quantity(&product.id, 4);
        assert_eq!(cart.lines()[0].quantity, 4);
    }

    #[test]
    fn test_remove_is_variant_insensitive() {
        let product = catalog_product("1");
        let other = catalog_product("2");
        let mut cart = Cart::new();
        cart.add(&product, 1, Some("Red"), Some("M"));
        cart.add(&product, 1, Some("Blue"), Some("M"));
        cart.add(&other, 1, None, None);

        assert!(cart.remove(&product.id));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.lines()[0].product.id, other.id);

        assert!(!cart.remove(&product.id));
    }

    #[test]
    fn test_totals_empty_cart_still_charges_flat_fee() {
        // Zero subtotal sits below the threshold, so the flat fee applies.
        // Checkout rejects empty carts before this is ever shown.
        let config = StoreConfig::default();
        let totals = Cart::new().totals(&config);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.shipping, config.shipping_fee);
        assert_eq!(totals.tax, Decimal::ZERO);
        assert_eq!(totals.total, config.shipping_fee);
    }

    #[test]
    fn test_totals_below_threshold_charges_shipping() {
        let config = StoreConfig::default();
        let mut cart = Cart::new();
        cart.add(&priced_product("p", dec!(3999)), 1, None, None);

        let totals = cart.totals(&config);
        assert_eq!(totals.subtotal, dec!(3999));
        assert_eq!(totals.shipping, dec!(100));
        assert_eq!(totals.tax, dec!(3999) * dec!(0.18));
        assert_eq!(totals.total, totals.subtotal + totals.shipping + totals.tax);
    }

    #[test]
    fn test_totals_free_shipping_at_threshold() {
        let config = StoreConfig::default();
        let mut cart = Cart::new();
        cart.add(&priced_product("p", dec!(4000)), 1, None, None);

        let totals = cart.totals(&config);
        assert_eq!(totals.shipping, Decimal::ZERO);
    }

    #[test]
    fn test_totals_monotonic_in_quantity() {
        let config = StoreConfig::default();
        let product = priced_product("p", dec!(1000));

        let mut previous = Decimal::MIN;
        for quantity in 1..=10 {
            let mut cart = Cart::new();
            cart.add(&product, quantity, None, None);
            let total = cart.totals(&config).total;
            assert!(total > previous, "total must grow with quantity");
            previous = total;
        }
    }

    #[test]
    fn test_totals_tax_unrounded() {
        let config = StoreConfig::default();
        let mut cart = Cart::new();
        // 18% of 333 = 59.94, exact in decimal
        cart.add(&priced_product("p", dec!(333)), 1, None, None);

        let totals = cart.totals(&config);
        assert_eq!(totals.tax, dec!(59.94));
    }
}
