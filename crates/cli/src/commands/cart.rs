//! Cart commands.

use sidabukke_storefront::catalog;
use sidabukke_storefront::error::{AppError, Result};
use sidabukke_storefront::state::AppState;

use crate::views;

pub fn show(state: &AppState) -> String {
    let store = state.store();
    views::CartPage {
        items: store.cart(),
        total: store.cart_total(),
    }
    .to_string()
}

pub fn add(state: &mut AppState, id: &str, qty: i64) -> Result<String> {
    let product = catalog::find(id).ok_or_else(|| AppError::NotFound(format!("produk {id}")))?;
    state.store_mut().add_to_cart(product, qty);
    Ok(show(state))
}

/// The home page's "Tambah Cepat" button.
pub fn quick_add(state: &mut AppState) -> Result<String> {
    let product = catalog::featured()
        .ok_or_else(|| AppError::NotFound("produk unggulan".to_string()))?;
    state.store_mut().add_to_cart(product, 1);
    Ok(show(state))
}

pub fn update(state: &mut AppState, id: &str, qty: i64) -> String {
    state.store_mut().update_quantity(id, qty);
    show(state)
}

pub fn remove(state: &mut AppState, id: &str) -> String {
    state.store_mut().remove_from_cart(id);
    show(state)
}

pub fn clear(state: &mut AppState) -> String {
    state.store_mut().clear_cart();
    show(state)
}
