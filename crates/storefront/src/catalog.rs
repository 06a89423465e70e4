//! Catalog filtering and sorting.
//!
//! Pure transformations over the product collection: free-text search,
//! facet filters (category, brand, price range), and stable sorting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// The facet that selects discounted products instead of a category.
pub const SALE_FACET: &str = "Sale";

/// An inclusive price range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// The widest range: matches every price.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: Decimal::MIN,
            max: Decimal::MAX,
        }
    }

    /// Whether `price` falls within this range (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, price: Decimal) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::full()
    }
}

/// A set of facet filter predicates.
///
/// Empty selection sets mean "no restriction"; the default selection is
/// the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetSelection {
    pub categories: Vec<String>,
    pub brands: Vec<String>,
    pub price_range: PriceRange,
}

impl FacetSelection {
    /// Whether a product passes every facet predicate.
    ///
    /// Selecting the special [`SALE_FACET`] category means "has a
    /// discount" and overrides plain category matching.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if self.categories.iter().any(|c| c == SALE_FACET) {
            if !product.on_sale() {
                return false;
            }
        } else if !self.categories.is_empty()
            && !self.categories.iter().any(|c| c == &product.category)
        {
            return false;
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| b == &product.brand) {
            return false;
        }
        self.price_range.contains(product.price)
    }
}

/// Sort keys for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Default ordering: preserves catalog order (no comparator).
    #[default]
    Featured,
    PriceLow,
    PriceHigh,
    Rating,
    /// Preserves catalog order; the data model has no timestamp to sort
    /// by, so "newest" is a pass-through like `Featured`.
    Newest,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "rating" => Ok(Self::Rating),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Case-insensitive substring search over name, description, category,
/// and brand. An empty query returns the collection unchanged.
#[must_use]
pub fn filter_by_text(products: &[Product], query: &str) -> Vec<Product> {
    if query.is_empty() {
        return products.to_vec();
    }
    let query = query.to_lowercase();
    products
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&query)
                || p.description.to_lowercase().contains(&query)
                || p.category.to_lowercase().contains(&query)
                || p.brand.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Apply facet predicates to the collection.
#[must_use]
pub fn filter_by_facets(products: &[Product], selection: &FacetSelection) -> Vec<Product> {
    products
        .iter()
        .filter(|p| selection.matches(p))
        .cloned()
        .collect()
}

/// Stable sort by the given key.
///
/// `Featured` and `Newest` preserve the input order.
#[must_use]
pub fn sort_by(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut sorted = products.to_vec();
    match key {
        SortKey::Featured | SortKey::Newest => {}
        SortKey::PriceLow => sorted.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceHigh => sorted.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => sorted.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
    sorted
}

/// Products carrying the featured flag, for the home page.
#[must_use]
pub fn featured(products: &[Product]) -> Vec<Product> {
    products.iter().filter(|p| p.featured).cloned().collect()
}

/// Up to `limit` products sharing a category with `product`, excluding
/// the product itself. Shown on the product detail page.
#[must_use]
pub fn related(products: &[Product], product: &Product, limit: usize) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.id != product.id && p.category == product.category)
        .take(limit)
        .cloned()
        .collect()
}
