//! The fixed product catalog.
//!
//! Products are never created or edited at runtime.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use sidabukke_core::{Product, ProductId};

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    vec![
        product(
            "sid001",
            "Sidabukke Teh Premium - Classic",
            150_000,
            "Teh hitam premium dengan aroma khas Sidabukke.",
            "Ditanam di ketinggian, diproses tradisional, menghasilkan rasa kaya dan aftertaste manis.",
            "/images/tehhitam.jpg",
            4.6,
        ),
        product(
            "sid002",
            "Sidabukke Teh Premium - Greentea",
            165_000,
            "teh hijau premium dengan aroma khas Sidabukke.",
            "wangi, cocok untuk pagi hari. Dikemas rapi untuk hadiah.",
            "/images/tehhijau.jpg",
            4.8,
        ),
        product(
            "sid003",
            "Sidabukke Teh Organik - Oolong",
            195_000,
            "Varian organik, dipanen terbatas setiap musim.dengan aroma khas Sidabukke",
            "Sertifikat organik, aroma floral, body yang seimbang.",
            "/images/tehoolong.jpg",
            4.9,
        ),
    ]
});

fn product(
    id: &str,
    name: &str,
    price: i64,
    short: &str,
    desc: &str,
    img: &str,
    rating: f64,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Decimal::from(price),
        short: short.to_owned(),
        desc: desc.to_owned(),
        img: img.to_owned(),
        rating,
    }
}

/// Every product, in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| p.id == id)
}

/// The product behind the home page's quick-add button.
#[must_use]
pub fn featured() -> Option<&'static Product> {
    PRODUCTS.first()
}

/// One star in a rating display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

impl Star {
    /// Single-character glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Full => '★',
            Self::Half => '⯪',
            Self::Empty => '☆',
        }
    }
}

/// Break a rating into `max` stars; a fractional part of at least 0.5 earns a
/// half star.
#[must_use]
pub fn stars(rating: f64, max: usize) -> Vec<Star> {
    #[allow(clippy::cast_precision_loss)]
    let clamped = rating.max(0.0).min(max as f64);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let full = clamped.floor() as usize;
    let half = clamped - clamped.floor() >= 0.5;

    (0..max)
        .map(|i| {
            if i < full {
                Star::Full
            } else if i == full && half {
                Star::Half
            } else {
                Star::Empty
            }
        })
        .collect()
}

/// Render a rating as a string of star glyphs.
#[must_use]
pub fn star_string(rating: f64) -> String {
    stars(rating, 5).into_iter().map(Star::glyph).collect()
}
