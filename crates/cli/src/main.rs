//! LUXE CLI - terminal shell for the storefront demo.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! luxe catalog --category Shoes --sort price-low
//!
//! # Build a cart (state persists under .luxe-state/ between runs)
//! luxe cart add 1 --quantity 2 --color Red --size M
//! luxe cart show
//!
//! # Log in and check out
//! luxe login -e priya@example.com -p secret1
//! luxe checkout --name "Priya Sharma" --phone 9876543210 \
//!     --street "14 MG Road" --city Bengaluru --state Karnataka \
//!     --pincode 560001 --payment upi
//!
//! # Scripted walkthrough against an in-memory store
//! luxe demo
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal program: stdout is the interface.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use luxe_storefront::config::StoreConfig;

mod commands;

#[derive(Parser)]
#[command(name = "luxe")]
#[command(author, version, about = "LUXE storefront demo shell")]
struct Cli {
    /// Directory for persisted state (default: LUXE_STATE_DIR or .luxe-state)
    #[arg(long, global = true)]
    state_dir: Option<std::path::PathBuf>,

    /// Run against an in-memory store, leaving no state behind
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog {
        /// Free-text search over name, description, category, and brand
        #[arg(short, long)]
        query: Option<String>,

        /// Filter by category (repeatable; "Sale" selects discounted items)
        #[arg(short, long)]
        category: Vec<String>,

        /// Filter by brand (repeatable)
        #[arg(short, long)]
        brand: Vec<String>,

        /// Minimum price
        #[arg(long)]
        min_price: Option<rust_decimal::Decimal>,

        /// Maximum price
        #[arg(long)]
        max_price: Option<rust_decimal::Decimal>,

        /// Sort order: featured, price-low, price-high, rating, newest
        #[arg(short, long, default_value = "featured")]
        sort: String,
    },
    /// Show one product with its reviews and related items
    Product {
        /// Product id
        id: String,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Log in (mock: any email, password of 6+ characters)
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account (mock)
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Password confirmation
        #[arg(long)]
        confirm_password: String,

        /// Account role (`customer` or `admin`)
        #[arg(short, long, default_value = "customer")]
        role: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Place an order for the current cart
    Checkout {
        /// Recipient name
        #[arg(long)]
        name: String,

        /// Phone number
        #[arg(long)]
        phone: String,

        /// Street address
        #[arg(long)]
        street: String,

        /// City
        #[arg(long)]
        city: String,

        /// State
        #[arg(long)]
        state: String,

        /// Postal code
        #[arg(long)]
        pincode: String,

        /// Payment method: card, upi, or cod
        #[arg(long, default_value = "card")]
        payment: String,
    },
    /// Delete all persisted state
    Reset,
    /// Run a scripted walkthrough against an in-memory store
    Demo,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and derived totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        id: String,

        /// Quantity (clamped to at least 1)
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,

        /// Color variant (defaults to the product's first color)
        #[arg(long)]
        color: Option<String>,

        /// Size variant (defaults to the product's first size)
        #[arg(long)]
        size: Option<String>,
    },
    /// Set the quantity for a product's cart lines
    Update {
        /// Product id
        id: String,

        /// New quantity (clamped to at least 1)
        quantity: u32,
    },
    /// Remove a product from the cart (all variants)
    Remove {
        /// Product id
        id: String,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show saved products
    Show,
    /// Add the product if absent, remove it if present
    Toggle {
        /// Product id
        id: String,
    },
    /// Remove a product from the wishlist
    Remove {
        /// Product id
        id: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StoreConfig::from_env()?;
    if let Some(dir) = cli.state_dir {
        config.state_dir = dir;
    }

    if matches!(cli.command, Commands::Demo) {
        return commands::demo::run(&config);
    }

    let mut state = commands::open_state(config.clone(), cli.ephemeral);
    match cli.command {
        Commands::Catalog {
            query,
            category,
            brand,
            min_price,
            max_price,
            sort,
        } => commands::catalog::browse(
            &mut state, query, category, brand, min_price, max_price, &sort,
        )?,
        Commands::Product { id } => commands::catalog::show_product(&mut state, &id)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&state),
            CartAction::Add {
                id,
                quantity,
                color,
                size,
            } => commands::cart::add(&mut state, &id, quantity, color.as_deref(), size.as_deref())?,
            CartAction::Update { id, quantity } => {
                commands::cart::update(&mut state, &id, quantity);
            }
            CartAction::Remove { id } => commands::cart::remove(&mut state, &id),
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::cart::show_wishlist(&state),
            WishlistAction::Toggle { id } => commands::cart::toggle_wishlist(&mut state, &id)?,
            WishlistAction::Remove { id } => commands::cart::remove_from_wishlist(&mut state, &id),
        },
        Commands::Login { email, password } => {
            commands::session::login(&mut state, &email, &password)?;
        }
        Commands::Signup {
            name,
            email,
            password,
            confirm_password,
            role,
        } => commands::session::signup(
            &mut state,
            &name,
            &email,
            &password,
            &confirm_password,
            &role,
        )?,
        Commands::Logout => commands::session::logout(&mut state),
        Commands::Checkout {
            name,
            phone,
            street,
            city,
            state: region,
            pincode,
            payment,
        } => {
            let address = luxe_storefront::models::DeliveryAddress {
                name,
                phone,
                street,
                city,
                state: region,
                pincode,
            };
            commands::session::checkout(&mut state, address, &payment)?;
        }
        Commands::Reset => commands::session::reset(&mut state, &config)?,
        Commands::Demo => unreachable!("handled above"),
    }

    commands::flush_notifications(&mut state);
    Ok(())
}
