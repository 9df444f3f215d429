//! Account commands: mock sign-in, registration, reset and support.
//!
//! Any credentials are accepted. Passwords are wrapped in a `SecretString`
//! as soon as they leave clap and are never stored.

use secrecy::SecretString;

use sidabukke_storefront::error::{AppError, Result};
use sidabukke_storefront::services::auth::{self, LoginForm, RegisterForm};
use sidabukke_storefront::services::support::{self, ContactMessage};
use sidabukke_storefront::state::AppState;
use sidabukke_storefront::store::RECENT_ORDER_COUNT;

use crate::views;

pub fn login(state: &mut AppState, email: String, password: String) -> String {
    let form = LoginForm {
        email,
        password: SecretString::from(password),
    };
    state.store_mut().login(form);
    show(state)
}

pub fn register(state: &mut AppState, name: String, email: String, password: String) -> String {
    let form = RegisterForm {
        name,
        email,
        password: SecretString::from(password),
    };
    state.store_mut().register(form);
    show(state)
}

pub fn logout(state: &mut AppState) -> String {
    state.store_mut().logout();
    views::Notice("Anda telah keluar.").to_string()
}

/// Account page: profile plus the most recent orders.
pub fn show(state: &AppState) -> String {
    let store = state.store();
    store.user().map_or_else(
        || views::Notice("Silakan login untuk melihat akun Anda.").to_string(),
        |user| {
            views::AccountPage {
                user,
                recent: store.recent_orders(RECENT_ORDER_COUNT),
            }
            .to_string()
        },
    )
}

pub fn forgot(email: &str) -> String {
    views::Notice(auth::request_password_reset(email)).to_string()
}

pub fn support(name: String, email: String, message: String) -> Result<String> {
    if message.trim().is_empty() {
        return Err(AppError::BadRequest("message is empty".to_string()));
    }
    let msg = ContactMessage {
        name,
        email,
        message,
    };
    Ok(views::Notice(support::submit(&msg)).to_string())
}
