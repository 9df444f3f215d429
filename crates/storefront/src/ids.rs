//! Order id generation.
//!
//! Ids are `ORD-<unix millis>`. Two orders placed within the same
//! millisecond (or after the clock steps backwards) would collide, so the
//! generator never issues a sequence number at or below the last one.

use chrono::{DateTime, Utc};

use sidabukke_core::{Order, OrderId};

/// Monotonic, time-derived order id source.
#[derive(Debug, Clone, Default)]
pub struct OrderIdGenerator {
    last: Option<i64>,
}

impl OrderIdGenerator {
    /// Create a generator with no history.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Create a generator that will not reissue any id already in `orders`.
    #[must_use]
    pub fn seeded_from(orders: &[Order]) -> Self {
        Self {
            last: orders.iter().filter_map(|o| o.id.sequence()).max(),
        }
    }

    /// Next id for an order placed at `now`.
    pub fn generate_at(&mut self, now: DateTime<Utc>) -> OrderId {
        let millis = now.timestamp_millis();
        let seq = match self.last {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };
        self.last = Some(seq);
        OrderId::from_sequence(seq)
    }

    /// Next id for an order placed now.
    pub fn generate(&mut self) -> OrderId {
        self.generate_at(Utc::now())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;
    use sidabukke_core::{OrderDetails, OrderStatus};

    use super::*;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_uses_timestamp() {
        let mut ids = OrderIdGenerator::new();
        assert_eq!(ids.generate_at(at(1_000)).as_str(), "ORD-1000");
        assert_eq!(ids.generate_at(at(2_000)).as_str(), "ORD-2000");
    }

    #[test]
    fn test_same_millisecond_does_not_collide() {
        let mut ids = OrderIdGenerator::new();
        let a = ids.generate_at(at(5_000));
        let b = ids.generate_at(at(5_000));
        let c = ids.generate_at(at(5_000));
        assert_eq!(a.as_str(), "ORD-5000");
        assert_eq!(b.as_str(), "ORD-5001");
        assert_eq!(c.as_str(), "ORD-5002");
    }

    #[test]
    fn test_clock_going_backwards() {
        let mut ids = OrderIdGenerator::new();
        ids.generate_at(at(9_000));
        assert_eq!(ids.generate_at(at(8_000)).as_str(), "ORD-9001");
    }

    #[test]
    fn test_rapid_calls_are_unique() {
        let mut ids = OrderIdGenerator::new();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1_000 {
            assert!(seen.insert(ids.generate()));
        }
    }

    #[test]
    fn test_seeded_from_existing_orders() {
        let order = Order {
            id: OrderId::from_sequence(10_000),
            items: Vec::new(),
            total: Decimal::ZERO,
            details: OrderDetails::default(),
            status: OrderStatus::Processing,
            created_at: at(10_000),
        };
        let mut ids = OrderIdGenerator::seeded_from(&[order]);
        assert_eq!(ids.generate_at(at(10_000)).as_str(), "ORD-10001");
    }
}
