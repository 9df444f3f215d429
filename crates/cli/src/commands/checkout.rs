//! Checkout command.
//!
//! # Usage
//!
//! ```bash
//! # Card: the order is placed right away
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 card \
//!     --number "4242 4242 4242 4242" --holder BUDI --expiry 12/30 --cvv 123
//!
//! # QRIS: first show the code, then confirm once paid with the id shown
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 qris
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 qris --confirm \
//!     --qris-id QRIS-1700000000000
//! ```
//!
//! Without `--qris-id`, confirming records a freshly generated code.

use rust_decimal::Decimal;
use secrecy::SecretString;

use sidabukke_core::QrisId;
use sidabukke_storefront::checkout::{self, CardInput, CheckoutError, PaymentInput, ShippingForm};
use sidabukke_storefront::error::{AppError, Result};
use sidabukke_storefront::qris::QrisPayment;
use sidabukke_storefront::state::AppState;
use sidabukke_storefront::tracking::Tracking;

use crate::PaymentArgs;
use crate::views;

pub fn run(
    state: &mut AppState,
    name: Option<String>,
    address: String,
    phone: String,
    payment: PaymentArgs,
) -> Result<String> {
    let form = ShippingForm {
        name: name.unwrap_or_else(|| ShippingForm::prefilled(state.store().user()).name),
        address,
        phone,
    };

    let payment = match payment {
        PaymentArgs::Card {
            number,
            holder,
            expiry,
            cvv,
        } => PaymentInput::Card(CardInput {
            number: SecretString::from(number),
            holder,
            expiry,
            cvv: SecretString::from(cvv),
        }),
        PaymentArgs::Qris { confirm: false, .. } => {
            if state.store().cart_is_empty() {
                return Err(CheckoutError::EmptyCart.into());
            }
            let qris = checkout::preview_qris(state.store());
            return Ok(views::QrisPage { qris: &qris }.to_string());
        }
        PaymentArgs::Qris {
            confirm: true,
            qris_id,
        } => PaymentInput::Qris {
            preview: qris_id
                .map(|id| shown_qris(&id, state.store().cart_total()))
                .transpose()?,
        },
    };

    let order = checkout::submit(state.store_mut(), form, payment)?;
    let tracking = Tracking::for_order(&order);
    Ok(views::OrderPage {
        order: &order,
        tracking: &tracking,
        placed: true,
    }
    .to_string())
}

/// The code shown by an earlier `qris` run, for the cart as it stands now.
fn shown_qris(id: &str, total: Decimal) -> Result<QrisPayment> {
    let id = id.trim();
    if !id.starts_with(QrisId::PREFIX) {
        return Err(AppError::BadRequest(format!("not a QRIS id: {id}")));
    }
    Ok(QrisPayment::with_id(QrisId::new(id), total))
}
