//! Cart line domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use luxe_core::ProductId;

use super::product::Product;

/// One (product, color, size) combination with a quantity.
///
/// Carries a full product snapshot so a persisted cart renders without the
/// catalog. Two lines are the same logical item iff their
/// [`CartLine::key`]s match; adding the same key merges quantities rather
/// than appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    /// Always at least 1.
    pub quantity: u32,
    pub selected_color: String,
    pub selected_size: String,
}

impl CartLine {
    /// The uniqueness key for line merging: (product id, color, size).
    #[must_use]
    pub fn key(&self) -> (&ProductId, &str, &str) {
        (&self.product.id, &self.selected_color, &self.selected_size)
    }

    /// Line total: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::dec;

    use super::*;
    use crate::fixtures;

    #[test]
    fn test_line_total() {
        let product = fixtures::products()
            .into_iter()
            .find(|p| p.price == dec!(2999))
            .unwrap();
        let line = CartLine {
            quantity: 3,
            selected_color: product.colors.first().cloned().unwrap_or_default(),
            selected_size: product.sizes.first().cloned().unwrap_or_default(),
            product,
        };
        assert_eq!(line.line_total(), dec!(8997));
    }
}
