//! Core types for the storefront.
//!
//! This module provides type-safe wrappers and records for the domain.

pub mod cart;
pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;
pub mod user;

pub use cart::{CartItem, cart_total};
pub use id::*;
pub use order::{CardSummary, Order, OrderDetails, PaymentDetails, QrisSummary};
pub use price::{CurrencyCode, Price};
pub use product::Product;
pub use status::*;
pub use user::{User, display_name_from_email};
