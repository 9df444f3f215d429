//! Sidabukke Core - Shared domain types.
//!
//! This crate provides the types used across all Sidabukke components:
//! - `storefront` - Store container, persistence, checkout and tracking
//! - `cli` - Command-line front end for browsing, cart and orders
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Ids, money, statuses, and the catalog/cart/order/user records

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
