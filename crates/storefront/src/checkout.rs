//! Checkout: shipping form, payment choice, order placement.
//!
//! The store container does not validate anything when placing an order.
//! The guards a shopper sees (empty cart, blank required fields) live here.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;
use tracing::{info, instrument};

use sidabukke_core::{CardSummary, Order, OrderDetails, PaymentDetails, User};

use crate::db::Repository;
use crate::qris::QrisPayment;
use crate::store::Store;

/// Reasons a checkout submission is turned away.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A required form field was blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Shipping contact fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingForm {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl ShippingForm {
    /// An empty form with the name prefilled from the signed-in user.
    #[must_use]
    pub fn prefilled(user: Option<&User>) -> Self {
        Self {
            name: user.map(|u| u.name.clone()).unwrap_or_default(),
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), CheckoutError> {
        require("name", &self.name)?;
        require("address", &self.address)?;
        require("phone", &self.phone)
    }
}

/// Card fields. Only the last four digits of the number survive checkout.
#[derive(Debug)]
pub struct CardInput {
    pub number: SecretString,
    pub holder: String,
    pub expiry: String,
    pub cvv: SecretString,
}

impl CardInput {
    fn validate(&self) -> Result<(), CheckoutError> {
        require("card number", self.number.expose_secret())?;
        require("card holder", &self.holder)?;
        require("card expiry", &self.expiry)?;
        require("card cvv", self.cvv.expose_secret())
    }

    /// Last four digits of the card number.
    #[must_use]
    pub fn last4(&self) -> String {
        let digits: Vec<char> = self
            .number
            .expose_secret()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let skip = digits.len().saturating_sub(4);
        digits.into_iter().skip(skip).collect()
    }
}

/// Chosen payment method and its inputs.
#[derive(Debug)]
pub enum PaymentInput {
    Card(CardInput),
    /// QRIS, optionally with the stub already shown to the shopper.
    Qris { preview: Option<QrisPayment> },
}

/// Generate the QRIS stub for the cart as it stands.
#[must_use]
pub fn preview_qris<R: Repository>(store: &Store<R>) -> QrisPayment {
    QrisPayment::generate(store.cart_total())
}

/// Validate the forms and place the order.
///
/// A QRIS preview is reused only if its amount still matches the cart total;
/// otherwise a fresh stub is generated.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if there is nothing to order, or
/// `CheckoutError::MissingField` for the first blank required field.
#[instrument(skip_all, fields(lines = store.cart_line_count()))]
pub fn submit<R: Repository>(
    store: &mut Store<R>,
    form: ShippingForm,
    payment: PaymentInput,
) -> Result<Order, CheckoutError> {
    if store.cart_is_empty() {
        return Err(CheckoutError::EmptyCart);
    }
    form.validate()?;

    let payment = match payment {
        PaymentInput::Card(card) => {
            card.validate()?;
            PaymentDetails::Card {
                card: CardSummary {
                    last4: card.last4(),
                },
            }
        }
        PaymentInput::Qris { preview } => {
            let total = store.cart_total();
            let qris = preview
                .filter(|q| q.amount == total)
                .unwrap_or_else(|| QrisPayment::generate(total));
            PaymentDetails::Qris {
                qris: qris.summary(),
            }
        }
    };

    let method = payment.method();
    let details = OrderDetails {
        name: form.name,
        address: form.address,
        phone: form.phone,
        payment: Some(payment),
    };

    let order = store
        .place_order(details)
        .ok_or(CheckoutError::EmptyCart)?;
    info!(order_id = %order.id, %method, "Checkout complete");
    Ok(order)
}

fn require(field: &'static str, value: &str) -> Result<(), CheckoutError> {
    if value.trim().is_empty() {
        return Err(CheckoutError::MissingField(field));
    }
    Ok(())
}
