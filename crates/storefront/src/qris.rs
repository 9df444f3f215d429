//! QRIS payment stub.
//!
//! This is not a payment integration. It produces a placeholder id and an
//! SVG that shows the id and amount as plain text for the shopper to look
//! at. Nothing here can confirm that a payment happened; the checkout flow
//! proceeds when the shopper says they have paid.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use sidabukke_core::{Price, QrisId, QrisSummary};

/// A generated QRIS stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrisPayment {
    pub id: QrisId,
    pub amount: Decimal,
    /// `data:image/svg+xml;utf8,...` URL of the placeholder image.
    pub image: String,
}

impl QrisPayment {
    /// Generate a stub for `amount` now.
    #[must_use]
    pub fn generate(amount: Decimal) -> Self {
        Self::generate_at(amount, Utc::now())
    }

    /// Generate a stub for `amount` at `now`.
    #[must_use]
    pub fn generate_at(amount: Decimal, now: DateTime<Utc>) -> Self {
        let qris = Self::with_id(QrisId::from_millis(now.timestamp_millis()), amount);
        tracing::debug!(qris_id = %qris.id, %amount, "Generated QRIS stub");
        qris
    }

    /// Rebuild the stub previously shown under `id` for `amount`.
    #[must_use]
    pub fn with_id(id: QrisId, amount: Decimal) -> Self {
        let image = svg_data_url(&render_svg(&id, amount));
        Self { id, amount, image }
    }

    /// The summary recorded on the order.
    #[must_use]
    pub fn summary(&self) -> QrisSummary {
        QrisSummary {
            id: self.id.clone(),
            image: self.image.clone(),
            amount: self.amount,
        }
    }
}

/// The 300×300 placeholder image.
fn render_svg(id: &QrisId, amount: Decimal) -> String {
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='300' height='300' viewBox='0 0 300 300'>\
<rect width='100%' height='100%' fill='white' rx='12'/>\
<g fill='#072a22' font-family='Arial, Helvetica, sans-serif'>\
<text x='50%' y='42%' dominant-baseline='middle' text-anchor='middle' font-size='18'>SCAN TO PAY</text>\
<text x='50%' y='54%' dominant-baseline='middle' text-anchor='middle' font-size='14'>{id}</text>\
<text x='50%' y='74%' dominant-baseline='middle' text-anchor='middle' font-size='12'>{price}</text>\
</g></svg>",
        price = Price::idr(amount),
    )
}

fn svg_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(svg))
}
