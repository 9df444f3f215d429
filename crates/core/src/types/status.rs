//! Status enums for orders and payments.

use serde::{Deserialize, Serialize};

/// Order fulfillment status.
///
/// Every order starts as [`OrderStatus::Processing`]. Nothing in the
/// storefront advances it; the later states exist so stored orders carrying
/// them still load and render.
///
/// The Indonesian labels are accepted as aliases when reading stored orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    #[serde(alias = "Diproses")]
    Processing,
    #[serde(alias = "Dalam Pengantaran")]
    Shipping,
    #[serde(alias = "Sampai")]
    Delivered,
}

impl OrderStatus {
    /// Customer-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Diproses",
            Self::Shipping => "Dalam Pengantaran",
            Self::Delivered => "Sampai",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Qris,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Qris => write!(f, "qris"),
        }
    }
}
