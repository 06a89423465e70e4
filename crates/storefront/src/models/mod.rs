//! Domain models for the storefront.
//!
//! Products and reviews are immutable reference data for the session;
//! cart lines, orders, and users are created by the update operations in
//! [`crate::state`].

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartLine;
pub use order::{DeliveryAddress, Order};
pub use product::{Product, Review};
pub use user::{Address, User};
