//! Sidabukke storefront library.
//!
//! Everything behind the shop's pages: the store container and its
//! persistence, the catalog, checkout, the QRIS stub, and order tracking.
//! Front ends own an [`state::AppState`] and call into it.
//!
//! # Modules
//!
//! - [`store`] - Store container for user, cart and orders
//! - [`db`] - Repository and key-value backends
//! - [`catalog`] - Fixed product list and star ratings
//! - [`checkout`] - Shipping/payment forms and order placement
//! - [`qris`] - Placeholder QRIS payment image
//! - [`tracking`] - Static shipment milestones
//! - [`services`] - Mock auth, password reset and support form

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod db;
pub mod error;
pub mod ids;
pub mod qris;
pub mod services;
pub mod state;
pub mod store;
pub mod tracking;
