//! Catalog product record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// A read-only catalog entry.
///
/// Field names match the stored JSON documents (`short`, `desc`, `img`).
/// Only `id` and `price` are required when decoding; stored snapshots may
/// carry any subset of the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub name: String,
    /// Unit price in rupiah.
    pub price: Decimal,
    /// One-line summary shown on product cards.
    #[serde(default)]
    pub short: String,
    /// Full description shown on the detail page.
    #[serde(default)]
    pub desc: String,
    /// Image path relative to the site root.
    #[serde(default)]
    pub img: String,
    /// Average rating out of five.
    #[serde(default)]
    pub rating: f64,
}

impl Product {
    /// Unit price for display.
    #[must_use]
    pub const fn display_price(&self) -> Price {
        Price::idr(self.price)
    }
}
