//! Order history and tracking.

use sidabukke_storefront::error::{AppError, Result};
use sidabukke_storefront::state::AppState;
use sidabukke_storefront::tracking;

use crate::views;

/// All orders, newest first.
pub fn list(state: &AppState) -> String {
    views::OrderList {
        orders: state.store().orders(),
    }
    .to_string()
}

/// One order with its tracking.
pub fn detail(state: &AppState, id: &str) -> Result<String> {
    let (order, tracking) = tracking::track(state.store(), id)
        .ok_or_else(|| AppError::NotFound(format!("pesanan {}", id.trim())))?;
    Ok(views::OrderPage {
        order,
        tracking: &tracking,
        placed: false,
    }
    .to_string())
}
