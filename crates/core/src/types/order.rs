//! Orders and the checkout details captured with them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::id::{OrderId, QrisId};
use super::price::Price;
use super::status::{OrderStatus, PaymentMethod};

/// A placed order.
///
/// `items` and `total` are copies taken at checkout and never change when
/// the cart does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub total: Decimal,
    pub details: OrderDetails,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Order total for display.
    #[must_use]
    pub const fn display_total(&self) -> Price {
        Price::idr(self.total)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.qty)).sum()
    }
}

/// Shipping contact plus payment summary submitted at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderDetails {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentDetails>,
}

impl OrderDetails {
    /// Shipping details without payment information.
    #[must_use]
    pub fn shipping(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            payment: None,
        }
    }

    /// Attach a payment summary.
    #[must_use]
    pub fn with_payment(mut self, payment: PaymentDetails) -> Self {
        self.payment = Some(payment);
        self
    }
}

/// What was recorded about the payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum PaymentDetails {
    Card { card: CardSummary },
    Qris { qris: QrisSummary },
}

impl PaymentDetails {
    /// The method this summary belongs to.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::Card { .. } => PaymentMethod::Card,
            Self::Qris { .. } => PaymentMethod::Qris,
        }
    }
}

/// Card payments keep only the last four digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSummary {
    pub last4: String,
}

/// The QRIS stub shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrisSummary {
    pub id: QrisId,
    /// `data:` URL of the displayed image.
    pub image: String,
    pub amount: Decimal,
}
