//! Product listing and detail.

use sidabukke_storefront::catalog;
use sidabukke_storefront::error::{AppError, Result};

use crate::views;

/// All products.
pub fn list() -> String {
    views::ProductList {
        products: catalog::all(),
    }
    .to_string()
}

/// One product's detail page.
pub fn show(id: &str) -> Result<String> {
    let product = catalog::find(id).ok_or_else(|| AppError::NotFound(format!("produk {id}")))?;
    Ok(views::ProductDetail { product }.to_string())
}
