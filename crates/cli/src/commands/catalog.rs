//! Catalog browsing commands.

use rust_decimal::Decimal;

use luxe_core::ProductId;
use luxe_storefront::catalog::{self, FacetSelection, PriceRange, SortKey};
use luxe_storefront::models::Product;
use luxe_storefront::state::AppState;
use luxe_storefront::store::KvStore;

/// List products matching the given query, facets, and sort order.
pub fn browse<S: KvStore>(
    state: &mut AppState<S>,
    query: Option<String>,
    categories: Vec<String>,
    brands: Vec<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    sort: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let sort: SortKey = sort.parse()?;
    let facets = FacetSelection {
        categories,
        brands,
        price_range: PriceRange {
            min: min_price.unwrap_or(Decimal::MIN),
            max: max_price.unwrap_or(Decimal::MAX),
        },
    };

    if let Some(query) = query {
        state.search(&query);
        state.take_notifications();
    }

    let listing = state.listing(&facets, sort);
    if listing.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    for product in &listing {
        println!("{}", product_line(product));
    }
    println!("{} product(s)", listing.len());
    Ok(())
}

/// Show one product in detail: variants, reviews, and related items.
pub fn show_product<S: KvStore>(
    state: &mut AppState<S>,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let id = ProductId::new(id);
    state.view_product(&id)?;

    // view_product just validated the id
    let Some(product) = state.selected_product() else {
        return Ok(());
    };

    println!("{} - {}", product.name, product.brand);
    println!("  {}", product.description);
    print!("  {}", super::money(product.price));
    if let Some(original) = product.original_price {
        print!(" (was {}", super::money(original));
        if let Some(percent) = product.discount_percent() {
            print!(", {percent}% off");
        }
        print!(")");
    }
    println!();
    println!("  Category: {}  Rating: {:.1} ({} reviews)", product.category, product.rating, product.review_count);
    if !product.colors.is_empty() {
        println!("  Colors: {}", product.colors.join(", "));
    }
    if !product.sizes.is_empty() {
        println!("  Sizes: {}", product.sizes.join(", "));
    }
    if !product.in_stock {
        println!("  OUT OF STOCK");
    }

    let reviews = state.reviews_for(&id);
    if !reviews.is_empty() {
        println!("\nReviews:");
        for review in reviews {
            println!(
                "  {}/5 {} ({}): {}",
                review.rating, review.user_name, review.date, review.comment
            );
        }
    }

    let product = product.clone();
    let related = catalog::related(state.products(), &product, 4);
    if !related.is_empty() {
        println!("\nRelated:");
        for related_product in &related {
            println!("  {}", product_line(related_product));
        }
    }
    Ok(())
}

fn product_line(product: &Product) -> String {
    let mut line = format!(
        "[{}] {} - {} - {}",
        product.id,
        product.name,
        product.brand,
        super::money(product.price),
    );
    if product.on_sale() {
        line.push_str(" (sale)");
    }
    if !product.in_stock {
        line.push_str(" (out of stock)");
    }
    line
}
