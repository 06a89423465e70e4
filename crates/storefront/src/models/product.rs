//! Product and review domain types.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use luxe_core::{ProductId, ReviewId};

/// A catalog product.
///
/// Immutable reference data for the session. Amounts are in the store
/// currency's standard unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Pre-discount price; `Some` marks the product as on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    pub category: String,
    pub brand: String,
    pub rating: f32,
    pub review_count: u32,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Whether the product has a discount.
    #[must_use]
    pub const fn on_sale(&self) -> bool {
        self.original_price.is_some()
    }

    /// Discount percentage relative to the original price, rounded to a
    /// whole percent. `None` when the product is not on sale or the
    /// original price is zero.
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= Decimal::ZERO {
            return None;
        }
        let ratio = (original - self.price) / original * Decimal::from(100);
        ratio.round().to_u32()
    }

    /// The first listed color, used as the default variant selection.
    #[must_use]
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// The first listed size, used as the default variant selection.
    #[must_use]
    pub fn default_size(&self) -> Option<&str> {
        self.sizes.first().map(String::as_str)
    }
}

/// A product review.
///
/// Consumed read-only by the product detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_name: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
    /// Number of "helpful" votes.
    pub helpful: u32,
}
