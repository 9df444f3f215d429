//! Cart line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::id::ProductId;
use super::product::Product;

/// A cart entry: a product snapshot plus the requested quantity.
///
/// Serialized flat, so a stored line item is the product's fields with an
/// extra `qty`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    /// Requested quantity, never below 1. Stored values outside
    /// `1..=u32::MAX` are clamped on decode.
    #[serde(default = "default_qty", deserialize_with = "clamped_qty")]
    pub qty: u32,
}

const fn default_qty() -> u32 {
    1
}

fn clamped_qty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let qty = i64::deserialize(deserializer)?;
    Ok(u32::try_from(qty.max(1)).unwrap_or(u32::MAX))
}

impl CartItem {
    /// Create a line item, clamping the quantity to at least 1.
    #[must_use]
    pub fn new(product: Product, qty: u32) -> Self {
        Self {
            product,
            qty: qty.max(1),
        }
    }

    /// Product id of this line.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.product.id
    }

    /// `price × qty`.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.qty)
    }
}

/// Sum of `price × qty` over `items`.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> Decimal {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tea(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Tea {id}"),
            price: Decimal::from(price),
            short: String::new(),
            desc: String::new(),
            img: String::new(),
            rating: 4.5,
        }
    }

    #[test]
    fn test_new_clamps_zero_quantity() {
        assert_eq!(CartItem::new(tea("sid001", 1), 0).qty, 1);
    }

    #[test]
    fn test_cart_total() {
        let items = vec![
            CartItem::new(tea("sid001", 150_000), 2),
            CartItem::new(tea("sid002", 165_000), 1),
        ];
        assert_eq!(cart_total(&items), Decimal::from(465_000));
        assert_eq!(cart_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_serialized_flat() {
        let item = CartItem::new(tea("sid001", 150_000), 2);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "sid001");
        assert_eq!(json["qty"], 2);
        assert!(json.get("product").is_none());
    }

    #[test]
    fn test_reads_numeric_price() {
        let json = r#"{"id":"sid001","name":"Classic","price":150000,"short":"s","desc":"d","img":"/x.jpg","rating":4.6,"qty":2}"#;
        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.product.price, Decimal::from(150_000));
        assert_eq!(item.line_total(), Decimal::from(300_000));
    }

    #[test]
    fn test_reads_minimal_line() {
        let item: CartItem =
            serde_json::from_str(r#"{"id":"sid001","price":150000,"qty":2}"#).unwrap();
        assert_eq!(item.id(), "sid001");
        assert_eq!(item.qty, 2);
        assert!(item.product.name.is_empty());
        assert!(item.product.rating.abs() < f64::EPSILON);
    }

    #[test]
    fn test_stored_quantity_clamped_on_read() {
        let parse = |qty: &str| {
            let json = format!(r#"{{"id":"sid001","price":1,"qty":{qty}}}"#);
            serde_json::from_str::<CartItem>(&json).unwrap().qty
        };
        assert_eq!(parse("0"), 1);
        assert_eq!(parse("-4"), 1);
        assert_eq!(parse("5000000000"), u32::MAX);
        assert_eq!(parse("3"), 3);

        let missing: CartItem = serde_json::from_str(r#"{"id":"sid001","price":1}"#).unwrap();
        assert_eq!(missing.qty, 1);
    }
}
