//! Shipment tracking view data.
//!
//! There is no tracking feed. Location, ETA and coordinates are fixed, and
//! milestone progress is read off the order's status.

use chrono::{DateTime, Utc};

use sidabukke_core::{Order, OrderStatus};

use crate::db::Repository;
use crate::store::Store;

/// Where every parcel is shown to be.
pub const CURRENT_LOCATION: &str = "Gudang Sidabukke, Kabupaten";
/// Estimated time to arrival shown for every order.
pub const ETA: &str = "2 hari";
/// Fixed map position.
pub const LATITUDE: &str = "-6.200000";
pub const LONGITUDE: &str = "106.816666";

/// One shipment milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackingStep {
    pub key: &'static str,
    pub label: &'static str,
    pub done: bool,
    /// Only the first step carries a time (the order's creation).
    pub time: Option<DateTime<Utc>>,
}

/// Everything the order detail page shows about delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracking {
    pub current_location: &'static str,
    pub eta: &'static str,
    pub steps: [TrackingStep; 4],
}

impl Tracking {
    /// Tracking for `order`, derived from its status alone.
    #[must_use]
    pub fn for_order(order: &Order) -> Self {
        let status = order.status;
        Self {
            current_location: CURRENT_LOCATION,
            eta: ETA,
            steps: [
                TrackingStep {
                    key: "packing",
                    label: "Pengemasan",
                    done: true,
                    time: Some(order.created_at),
                },
                TrackingStep {
                    key: "dispatch",
                    label: "Dikirim dari Gudang",
                    done: status != OrderStatus::Processing,
                    time: None,
                },
                TrackingStep {
                    key: "in_transit",
                    label: "Dalam Pengantaran",
                    done: matches!(status, OrderStatus::Shipping | OrderStatus::Delivered),
                    time: None,
                },
                TrackingStep {
                    key: "delivered",
                    label: "Sampai Tujuan",
                    done: status == OrderStatus::Delivered,
                    time: None,
                },
            ],
        }
    }

    /// Embeddable map URL for the fixed coordinates.
    #[must_use]
    pub fn map_url(&self) -> String {
        format!("https://www.google.com/maps?q={LATITUDE},{LONGITUDE}&z=14&output=embed")
    }
}

/// Look up `order_id` and build its tracking view. Unknown ids give `None`.
#[must_use]
pub fn track<'a, R: Repository>(store: &'a Store<R>, order_id: &str) -> Option<(&'a Order, Tracking)> {
    let order = store.find_order(order_id.trim())?;
    Some((order, Tracking::for_order(order)))
}
