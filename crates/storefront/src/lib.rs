//! LUXE Storefront library.
//!
//! A client-side storefront: catalog browsing, cart and wishlist, mock
//! checkout, mock authentication, and role-gated navigation, backed by
//! in-memory fixture data and simple key-value persistence.
//!
//! # Architecture
//!
//! All application state lives in one explicit [`state::AppState`] struct
//! owned by the top-level controller. Views receive read-only references;
//! every mutation goes through a discrete update operation which commits
//! the transition, persists it with an explicit save call, and pushes any
//! user-facing [`notify::Notification`]s into an outbox for the
//! presentation layer to drain.
//!
//! There is no server, no real payment processing, and no real
//! authentication anywhere in this crate.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod nav;
pub mod notify;
pub mod services;
pub mod state;
pub mod store;
pub mod wishlist;
