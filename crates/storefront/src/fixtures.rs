//! Static mock datasets.
//!
//! The storefront has no backend; products, reviews, and historical
//! orders are fixture data built fresh per call and treated as read-only
//! input everywhere else.

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::dec;

use luxe_core::{OrderId, OrderStatus, PaymentMethod, ProductId, ReviewId, UserId};

use crate::models::{CartLine, DeliveryAddress, Order, Product, Review};

/// The catalog categories, in display order.
pub const CATEGORIES: [&str; 4] = ["Women", "Men", "Accessories", "Shoes"];

/// The catalog brands, in display order.
pub const BRANDS: [&str; 6] = [
    "Elegance Co.",
    "Urban Style",
    "LuxeLeather",
    "StepStyle",
    "VisionLux",
    "Chronos",
];

/// ID of the demo user owning the fixture orders.
pub const DEMO_USER_ID: &str = "user-demo";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

/// The mock product catalog.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("1"),
            name: "Silk Evening Dress".to_owned(),
            description: "Flowing silk dress with a draped neckline, made for evening wear."
                .to_owned(),
            price: dec!(2999),
            original_price: Some(dec!(3999)),
            category: "Women".to_owned(),
            brand: "Elegance Co.".to_owned(),
            rating: 4.5,
            review_count: 128,
            images: strings(&["https://images.luxe.example/products/silk-evening-dress.jpg"]),
            colors: strings(&["Red", "Blue", "Black"]),
            sizes: strings(&["S", "M", "L"]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("2"),
            name: "Classic Leather Jacket".to_owned(),
            description: "Full-grain leather jacket with a quilted lining and brass hardware."
                .to_owned(),
            price: dec!(7999),
            original_price: None,
            category: "Men".to_owned(),
            brand: "Urban Style".to_owned(),
            rating: 4.7,
            review_count: 89,
            images: strings(&["https://images.luxe.example/products/leather-jacket.jpg"]),
            colors: strings(&["Black", "Brown"]),
            sizes: strings(&["M", "L", "XL"]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("3"),
            name: "Leather Tote Bag".to_owned(),
            description: "Structured tote in pebbled leather with an interior zip pocket."
                .to_owned(),
            price: dec!(4499),
            original_price: Some(dec!(5999)),
            category: "Accessories".to_owned(),
            brand: "LuxeLeather".to_owned(),
            rating: 4.6,
            review_count: 54,
            images: strings(&["https://images.luxe.example/products/leather-tote.jpg"]),
            colors: strings(&["Tan", "Black"]),
            sizes: strings(&["One Size"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("4"),
            name: "Running Sneakers".to_owned(),
            description: "Lightweight knit runners with a responsive foam midsole.".to_owned(),
            price: dec!(3499),
            original_price: None,
            category: "Shoes".to_owned(),
            brand: "StepStyle".to_owned(),
            rating: 4.3,
            review_count: 201,
            images: strings(&["https://images.luxe.example/products/running-sneakers.jpg"]),
            colors: strings(&["White", "Grey", "Blue"]),
            sizes: strings(&["7", "8", "9", "10"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("5"),
            name: "Aviator Sunglasses".to_owned(),
            description: "Polarized aviators with a slim metal frame and UV400 lenses."
                .to_owned(),
            price: dec!(1999),
            original_price: Some(dec!(2499)),
            category: "Accessories".to_owned(),
            brand: "VisionLux".to_owned(),
            rating: 4.2,
            review_count: 167,
            images: strings(&["https://images.luxe.example/products/aviator-sunglasses.jpg"]),
            colors: strings(&["Gold", "Silver"]),
            sizes: strings(&["One Size"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("6"),
            name: "Chronograph Watch".to_owned(),
            description: "Stainless steel chronograph with a sapphire crystal and date window."
                .to_owned(),
            price: dec!(12999),
            original_price: None,
            category: "Accessories".to_owned(),
            brand: "Chronos".to_owned(),
            rating: 4.8,
            review_count: 76,
            images: strings(&["https://images.luxe.example/products/chronograph-watch.jpg"]),
            colors: strings(&["Silver", "Black"]),
            sizes: strings(&["One Size"]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("7"),
            name: "Floral Summer Dress".to_owned(),
            description: "Breezy cotton dress with an all-over floral print.".to_owned(),
            price: dec!(1899),
            original_price: None,
            category: "Women".to_owned(),
            brand: "Elegance Co.".to_owned(),
            rating: 4.1,
            review_count: 95,
            images: strings(&["https://images.luxe.example/products/floral-summer-dress.jpg"]),
            colors: strings(&["Yellow", "White"]),
            sizes: strings(&["XS", "S", "M", "L"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("8"),
            name: "Slim Fit Chinos".to_owned(),
            description: "Stretch cotton chinos with a tapered leg and garment-dyed finish."
                .to_owned(),
            price: dec!(2299),
            original_price: Some(dec!(2799)),
            category: "Men".to_owned(),
            brand: "Urban Style".to_owned(),
            rating: 4.0,
            review_count: 143,
            images: strings(&["https://images.luxe.example/products/slim-fit-chinos.jpg"]),
            colors: strings(&["Beige", "Navy", "Olive"]),
            sizes: strings(&["30", "32", "34", "36"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("9"),
            name: "Suede Ankle Boots".to_owned(),
            description: "Water-resistant suede boots with a stacked heel and side zip."
                .to_owned(),
            price: dec!(5499),
            original_price: None,
            category: "Shoes".to_owned(),
            brand: "StepStyle".to_owned(),
            rating: 4.4,
            review_count: 67,
            images: strings(&["https://images.luxe.example/products/suede-ankle-boots.jpg"]),
            colors: strings(&["Tan", "Black"]),
            sizes: strings(&["6", "7", "8", "9"]),
            in_stock: true,
            featured: true,
        },
        Product {
            id: ProductId::new("10"),
            name: "Cashmere Scarf".to_owned(),
            description: "Two-ply cashmere scarf woven in a classic herringbone pattern."
                .to_owned(),
            price: dec!(2499),
            original_price: None,
            category: "Accessories".to_owned(),
            brand: "Elegance Co.".to_owned(),
            rating: 4.6,
            review_count: 38,
            images: strings(&["https://images.luxe.example/products/cashmere-scarf.jpg"]),
            colors: strings(&["Cream", "Grey", "Burgundy"]),
            sizes: strings(&["One Size"]),
            in_stock: true,
            featured: false,
        },
        Product {
            id: ProductId::new("11"),
            name: "Denim Jacket".to_owned(),
            description: "Washed denim jacket with a relaxed fit and contrast stitching."
                .to_owned(),
            price: dec!(3299),
            original_price: Some(dec!(3999)),
            category: "Women".to_owned(),
            brand: "Urban Style".to_owned(),
            rating: 4.3,
            review_count: 112,
            images: strings(&["https://images.luxe.example/products/denim-jacket.jpg"]),
            colors: strings(&["Light Blue", "Dark Blue"]),
            sizes: strings(&["S", "M", "L"]),
            in_stock: false,
            featured: false,
        },
        Product {
            id: ProductId::new("12"),
            name: "Leather Loafers".to_owned(),
            description: "Hand-finished penny loafers on a flexible rubber sole.".to_owned(),
            price: dec!(6499),
            original_price: None,
            category: "Shoes".to_owned(),
            brand: "LuxeLeather".to_owned(),
            rating: 4.5,
            review_count: 58,
            images: strings(&["https://images.luxe.example/products/leather-loafers.jpg"]),
            colors: strings(&["Brown", "Black"]),
            sizes: strings(&["7", "8", "9", "10", "11"]),
            in_stock: true,
            featured: false,
        },
    ]
}

/// The mock review dataset.
#[must_use]
pub fn reviews() -> Vec<Review> {
    vec![
        Review {
            id: ReviewId::new("r1"),
            product_id: ProductId::new("1"),
            user_name: "Ananya".to_owned(),
            rating: 5,
            comment: "Beautiful drape, fits exactly as pictured.".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 6, 14).unwrap_or_default(),
            helpful: 24,
        },
        Review {
            id: ReviewId::new("r2"),
            product_id: ProductId::new("1"),
            user_name: "Meera".to_owned(),
            rating: 4,
            comment: "Lovely fabric, though the red runs slightly bright.".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 7, 2).unwrap_or_default(),
            helpful: 11,
        },
        Review {
            id: ReviewId::new("r3"),
            product_id: ProductId::new("2"),
            user_name: "Rohan".to_owned(),
            rating: 5,
            comment: "Leather softened up after a week. Worth every rupee.".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 5, 21).unwrap_or_default(),
            helpful: 31,
        },
        Review {
            id: ReviewId::new("r4"),
            product_id: ProductId::new("6"),
            user_name: "Vikram".to_owned(),
            rating: 5,
            comment: "The chronograph keeps excellent time and looks sharp.".to_owned(),
            date: NaiveDate::from_ymd_opt(2025, 8, 9).unwrap_or_default(),
            helpful: 17,
        },
    ]
}

/// Historical demo orders shown on the profile and admin pages.
#[must_use]
pub fn orders() -> Vec<Order> {
    let catalog = products();
    let line = |product_id: &str, quantity: u32| -> Option<CartLine> {
        let product = catalog.iter().find(|p| p.id.as_str() == product_id)?;
        Some(CartLine {
            quantity,
            selected_color: product.default_color().unwrap_or_default().to_owned(),
            selected_size: product.default_size().unwrap_or_default().to_owned(),
            product: product.clone(),
        })
    };
    let address = DeliveryAddress {
        name: "Demo Customer".to_owned(),
        phone: "9876543210".to_owned(),
        street: "14 MG Road".to_owned(),
        city: "Bengaluru".to_owned(),
        state: "Karnataka".to_owned(),
        pincode: "560001".to_owned(),
    };

    vec![
        Order {
            id: OrderId::new("ORD-2025-1042"),
            user_id: UserId::new(DEMO_USER_ID),
            items: line("2", 1).into_iter().collect(),
            total: dec!(9438.82),
            status: OrderStatus::Delivered,
            date: Utc.with_ymd_and_hms(2025, 7, 18, 11, 24, 0)
                .single()
                .unwrap_or_default(),
            delivery_address: address.clone(),
            payment_method: PaymentMethod::Card,
        },
        Order {
            id: OrderId::new("ORD-2025-2318"),
            user_id: UserId::new(DEMO_USER_ID),
            items: [line("4", 1), line("10", 2)].into_iter().flatten().collect(),
            total: dec!(10026.46),
            status: OrderStatus::Shipped,
            date: Utc.with_ymd_and_hms(2025, 8, 22, 16, 5, 0)
                .single()
                .unwrap_or_default(),
            delivery_address: address,
            payment_method: PaymentMethod::Upi,
        },
    ]
}
