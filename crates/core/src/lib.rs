//! LUXE Core - Shared types library.
//!
//! This crate provides common types used across all LUXE storefront components:
//! - `storefront` - Application library (catalog, cart, checkout, auth)
//! - `cli` - Command-line driver for browsing and demos
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no persistence, no
//! presentation. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
