//! Plain-text pages.
//!
//! Each page is a small struct borrowing what it shows and implementing
//! `Display`, so commands build one and call `to_string()`.

use core::fmt;

use rust_decimal::Decimal;

use sidabukke_core::{CartItem, Order, PaymentDetails, Price, Product, User};
use sidabukke_storefront::catalog;
use sidabukke_storefront::error::AppError;
use sidabukke_storefront::qris::QrisPayment;
use sidabukke_storefront::state::AppState;
use sidabukke_storefront::tracking::Tracking;

/// Top bar: shop name, who is signed in, cart badge.
pub struct Header<'a> {
    pub store_name: &'a str,
    pub user: Option<&'a User>,
    pub cart_count: usize,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            store_name: &state.config().store_name,
            user: state.store().user(),
            cart_count: state.store().cart_line_count(),
        }
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = self
            .user
            .map_or_else(|| "Login".to_string(), |u| format!("Halo, {}", u.name));
        write!(
            f,
            "== {} ==  {who} | Keranjang ({})",
            self.store_name, self.cart_count
        )
    }
}

/// A one-line message page.
pub struct Notice<'a>(pub &'a str);

impl fmt::Display for Notice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Page for a product or order that does not exist.
pub fn not_found(err: &AppError) -> String {
    match err {
        AppError::NotFound(what) => format!("Tidak ditemukan: {what}"),
        other => other.to_string(),
    }
}

pub struct ProductList<'a> {
    pub products: &'a [Product],
}

impl fmt::Display for ProductList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Produk")?;
        for p in self.products {
            writeln!(
                f,
                "  [{}] {} - {}  {} {}",
                p.id,
                p.name,
                p.display_price(),
                catalog::star_string(p.rating),
                p.rating
            )?;
            writeln!(f, "        {}", p.short)?;
        }
        Ok(())
    }
}

pub struct ProductDetail<'a> {
    pub product: &'a Product,
}

impl fmt::Display for ProductDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.product;
        writeln!(f, "{} [{}]", p.name, p.id)?;
        writeln!(f, "{} {}", catalog::star_string(p.rating), p.rating)?;
        writeln!(f, "{}", p.display_price())?;
        writeln!(f)?;
        writeln!(f, "{}", p.short)?;
        writeln!(f, "{}", p.desc)?;
        write!(f, "Gambar: {}", p.img)
    }
}

pub struct CartPage<'a> {
    pub items: &'a [CartItem],
    pub total: Decimal,
}

impl fmt::Display for CartPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Keranjang")?;
        if self.items.is_empty() {
            return write!(f, "  Keranjang kosong.");
        }
        write_lines(f, self.items)?;
        write!(f, "Total: {}", Price::idr(self.total))
    }
}

pub struct QrisPage<'a> {
    pub qris: &'a QrisPayment,
}

impl fmt::Display for QrisPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Bayar dengan QRIS")?;
        writeln!(f, "  ID: {}", self.qris.id)?;
        writeln!(f, "  Jumlah: {}", Price::idr(self.qris.amount))?;
        writeln!(f, "  Gambar: {}", self.qris.image)?;
        write!(
            f,
            "Setelah membayar, jalankan lagi dengan --confirm --qris-id {} (Saya sudah membayar).",
            self.qris.id
        )
    }
}

pub struct OrderList<'a> {
    pub orders: &'a [Order],
}

impl fmt::Display for OrderList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Pesanan")?;
        if self.orders.is_empty() {
            return write!(f, "  Belum ada pesanan.");
        }
        write_order_rows(f, self.orders)
    }
}

pub struct OrderPage<'a> {
    pub order: &'a Order,
    pub tracking: &'a Tracking,
    /// Just placed at checkout.
    pub placed: bool,
}

impl fmt::Display for OrderPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let order = self.order;
        if self.placed {
            writeln!(f, "Terima kasih! Pesanan Anda telah dibuat.")?;
        }
        writeln!(f, "Pesanan {}", order.id)?;
        writeln!(
            f,
            "  Dibuat: {}",
            order.created_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(f, "  Status: {}", order.status)?;
        writeln!(f, "  Penerima: {}", order.details.name)?;
        writeln!(f, "  Alamat: {}", order.details.address)?;
        writeln!(f, "  Telepon: {}", order.details.phone)?;
        match &order.details.payment {
            Some(PaymentDetails::Card { card }) => {
                writeln!(f, "  Pembayaran: Kartu **** {}", card.last4)?;
            }
            Some(PaymentDetails::Qris { qris }) => {
                writeln!(f, "  Pembayaran: QRIS {}", qris.id)?;
            }
            None => {}
        }
        write_lines(f, &order.items)?;
        writeln!(f, "Total: {}", order.display_total())?;
        writeln!(f)?;

        let tracking = self.tracking;
        writeln!(f, "Lacak Pengiriman")?;
        writeln!(f, "  Lokasi: {}", tracking.current_location)?;
        writeln!(f, "  Estimasi: {}", tracking.eta)?;
        for step in &tracking.steps {
            let mark = if step.done { 'x' } else { ' ' };
            write!(f, "  [{mark}] {}", step.label)?;
            if let Some(time) = step.time {
                write!(f, " ({})", time.format("%Y-%m-%d %H:%M"))?;
            }
            writeln!(f)?;
        }
        write!(f, "  Peta: {}", tracking.map_url())
    }
}

pub struct AccountPage<'a> {
    pub user: &'a User,
    /// Most recent orders, newest first.
    pub recent: &'a [Order],
}

impl fmt::Display for AccountPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Akun")?;
        writeln!(f, "  Nama: {}", self.user.name)?;
        writeln!(f, "  Email: {}", self.user.email)?;
        writeln!(f, "Pesanan terakhir")?;
        if self.recent.is_empty() {
            return write!(f, "  Belum ada pesanan.");
        }
        write_order_rows(f, self.recent)
    }
}

fn write_lines(f: &mut fmt::Formatter<'_>, items: &[CartItem]) -> fmt::Result {
    for item in items {
        writeln!(
            f,
            "  {} x{}  @ {} = {}",
            item.product.name,
            item.qty,
            item.product.display_price(),
            Price::idr(item.line_total())
        )?;
    }
    Ok(())
}

fn write_order_rows(f: &mut fmt::Formatter<'_>, orders: &[Order]) -> fmt::Result {
    let mut rows = orders.iter().peekable();
    while let Some(order) = rows.next() {
        write!(
            f,
            "  {}  {}  {} item  {}  {}",
            order.id,
            order.created_at.format("%Y-%m-%d"),
            order.unit_count(),
            order.display_total(),
            order.status
        )?;
        if rows.peek().is_some() {
            writeln!(f)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{DateTime, Utc};
    use sidabukke_core::{CardSummary, OrderDetails, OrderId, OrderStatus};

    use super::*;

    fn order() -> Order {
        let product = catalog::find("sid001").unwrap().clone();
        Order {
            id: OrderId::from_sequence(1_700_000_000_000),
            items: vec![CartItem::new(product, 3)],
            total: Decimal::from(450_000),
            details: OrderDetails::shipping("A", "B", "C").with_payment(PaymentDetails::Card {
                card: CardSummary {
                    last4: "4242".to_string(),
                },
            }),
            status: OrderStatus::Processing,
            created_at: DateTime::parse_from_rfc3339("2025-01-02T03:04:05Z")
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_header() {
        let user = User::new("Budi", "budi@example.com");
        let header = Header {
            store_name: "Sidabukke Teh",
            user: Some(&user),
            cart_count: 2,
        };
        assert_eq!(
            header.to_string(),
            "== Sidabukke Teh ==  Halo, Budi | Keranjang (2)"
        );

        let anon = Header {
            user: None,
            ..header
        };
        assert!(anon.to_string().contains("Login"));
    }

    #[test]
    fn test_product_detail_shows_stars() {
        let page = ProductDetail {
            product: catalog::find("sid002").unwrap(),
        }
        .to_string();
        assert!(page.contains("★★★★⯪ 4.8"));
        assert!(page.contains("Rp 165.000"));
    }

    #[test]
    fn test_order_page() {
        let order = order();
        let tracking = Tracking::for_order(&order);
        let page = OrderPage {
            order: &order,
            tracking: &tracking,
            placed: false,
        }
        .to_string();

        assert!(page.contains("Pesanan ORD-1700000000000"));
        assert!(page.contains("Status: Diproses"));
        assert!(page.contains("Kartu **** 4242"));
        assert!(page.contains("x3"));
        assert!(page.contains("Total: Rp 450.000"));
        assert!(page.contains("[x] Pengemasan (2025-01-02 03:04)"));
        assert!(page.contains("[ ] Sampai Tujuan"));
        assert!(!page.contains("Terima kasih"));
    }

    #[test]
    fn test_account_page_lists_recent() {
        let user = User::new("Budi", "budi@example.com");
        let orders = [order()];
        let page = AccountPage {
            user: &user,
            recent: &orders,
        }
        .to_string();
        assert!(page.contains("budi@example.com"));
        assert!(page.contains("ORD-1700000000000"));
        assert!(page.contains("3 item"));
    }

    #[test]
    fn test_not_found_message() {
        let err = AppError::NotFound("pesanan ORD-1".to_string());
        assert_eq!(not_found(&err), "Tidak ditemukan: pesanan ORD-1");
    }
}
