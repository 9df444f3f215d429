//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Catalog prices and order totals are stored as bare [`Decimal`] amounts;
/// wrap them in a `Price` to display them.
///
/// ```
/// use rust_decimal::Decimal;
/// use sidabukke_core::Price;
///
/// assert_eq!(Price::idr(Decimal::from(150_000)).to_string(), "Rp 150.000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (rupiah, not sen).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a price in Indonesian Rupiah.
    #[must_use]
    pub const fn idr(amount: Decimal) -> Self {
        Self {
            amount,
            currency_code: CurrencyCode::IDR,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (group, decimal) = self.currency_code.separators();
        let sign = if self.amount.is_sign_negative() && !self.amount.is_zero() {
            "-"
        } else {
            ""
        };
        let plain = self.amount.abs().round_dp(2).normalize().to_string();
        let (int_part, frac_part) = plain.split_once('.').unwrap_or((plain.as_str(), ""));

        write!(
            f,
            "{}{sign}{}",
            self.currency_code.symbol(),
            group_thousands(int_part, group)
        )?;
        if !frac_part.is_empty() {
            write!(f, "{decimal}{frac_part}")?;
        }
        Ok(())
    }
}

/// Insert `sep` between every group of three digits, counting from the right.
fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(c);
    }
    out
}

/// ISO 4217 currency codes. The shop only sells in rupiah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    IDR,
}

impl CurrencyCode {
    /// Display prefix, including any trailing space.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::IDR => "Rp ",
        }
    }

    /// Thousands and decimal separators for the currency's home locale.
    const fn separators(self) -> (char, char) {
        match self {
            Self::IDR => ('.', ','),
        }
    }
}
