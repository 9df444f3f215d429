//! Command implementations.
//!
//! Each command mutates the store container through [`AppState`] and
//! returns the rendered page. Nothing here holds state of its own.

mod account;
mod cart;
mod catalog;
mod checkout;
mod orders;

use sidabukke_storefront::error::Result;
use sidabukke_storefront::state::AppState;

use crate::{CartAction, Commands};

/// Run one command and return the page to print.
///
/// # Errors
///
/// Returns `AppError::NotFound` for unknown products/orders, and checkout or
/// input errors for rejected submissions.
pub fn run(command: Commands, state: &mut AppState) -> Result<String> {
    match command {
        Commands::Products => Ok(catalog::list()),
        Commands::Product { id } => catalog::show(&id),
        Commands::QuickAdd => cart::quick_add(state),
        Commands::Cart { action } => match action.unwrap_or(CartAction::Show) {
            CartAction::Show => Ok(cart::show(state)),
            CartAction::Add { id, qty } => cart::add(state, &id, qty),
            CartAction::Update { id, qty } => Ok(cart::update(state, &id, qty)),
            CartAction::Remove { id } => Ok(cart::remove(state, &id)),
            CartAction::Clear => Ok(cart::clear(state)),
        },
        Commands::Checkout {
            name,
            address,
            phone,
            payment,
        } => checkout::run(state, name, address, phone, payment),
        Commands::Login { email, password } => Ok(account::login(state, email, password)),
        Commands::Register {
            name,
            email,
            password,
        } => Ok(account::register(state, name, email, password)),
        Commands::Logout => Ok(account::logout(state)),
        Commands::Account => Ok(account::show(state)),
        Commands::Forgot { email } => Ok(account::forgot(&email)),
        Commands::Support {
            name,
            email,
            message,
        } => account::support(name, email, message),
        Commands::Orders => Ok(orders::list(state)),
        Commands::Order { id } | Commands::Track { id } => orders::detail(state, &id),
    }
}
