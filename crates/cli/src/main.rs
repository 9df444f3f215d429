//! Sidabukke CLI - The storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse
//! sb-cli products
//! sb-cli product sid001
//!
//! # Cart
//! sb-cli cart add sid001 --qty 2
//! sb-cli cart update sid001 3
//! sb-cli cart show
//!
//! # Checkout by card, or show a QRIS code and then confirm payment
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 card --number "4242 4242 4242 4242" \
//!     --holder "BUDI" --expiry 12/30 --cvv 123
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 qris
//! sb-cli checkout --address "Jl. Merdeka 1" --phone 0812 qris --confirm \
//!     --qris-id QRIS-1700000000000
//!
//! # Orders
//! sb-cli orders
//! sb-cli track ORD-1700000000000
//! ```
//!
//! State lives in `SIDABUKKE_DATA_DIR` (default `.sidabukke`); see
//! `sidabukke_storefront::config` for all variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sidabukke_storefront::config::StorefrontConfig;
use sidabukke_storefront::state::AppState;

mod commands;
mod views;

#[derive(Parser)]
#[command(name = "sb-cli")]
#[command(author, version, about = "Sidabukke Teh storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    Products,
    /// Show one product
    Product {
        /// Product id (e.g. sid001)
        id: String,
    },
    /// Add the featured product to the cart
    QuickAdd,
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: Option<CartAction>,
    },
    /// Check out the cart
    Checkout {
        /// Recipient name (defaults to the signed-in user's name)
        #[arg(long)]
        name: Option<String>,

        /// Shipping address
        #[arg(long, default_value = "")]
        address: String,

        /// Phone number
        #[arg(long, default_value = "")]
        phone: String,

        #[command(subcommand)]
        payment: PaymentArgs,
    },
    /// Sign in (any credentials are accepted)
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account (nothing is verified)
    Register {
        #[arg(short, long, default_value = "")]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in account and recent orders
    Account,
    /// Request a password reset link (demo)
    Forgot {
        email: String,
    },
    /// Send a message to support (demo)
    Support {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long)]
        message: String,
    },
    /// List orders, newest first
    Orders,
    /// Show one order with its tracking
    Order {
        id: String,
    },
    /// Track an order by id
    Track {
        id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart
    Show,
    /// Add a product
    Add {
        id: String,

        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        qty: i64,
    },
    /// Set a line's quantity (values below 1 become 1)
    Update {
        id: String,

        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Remove a line
    Remove {
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum PaymentArgs {
    /// Pay by card (only the last four digits are kept)
    Card {
        #[arg(long)]
        number: String,

        #[arg(long)]
        holder: String,

        #[arg(long)]
        expiry: String,

        #[arg(long)]
        cvv: String,
    },
    /// Pay by QRIS
    Qris {
        /// "I have paid": place the order
        #[arg(long)]
        confirm: bool,

        /// Id of the QRIS code that was shown (e.g. QRIS-1700000000000)
        #[arg(long, requires = "confirm")]
        qris_id: Option<String>,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sidabukke_storefront=info,sb_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(78);
        }
    };

    let mut state = AppState::open(config);

    match commands::run(cli.command, &mut state) {
        Ok(page) => print_page(&state, &page),
        Err(e) if e.is_not_found() => print_page(&state, &views::not_found(&e)),
        Err(e) => {
            tracing::error!("Command failed: {e}");
            std::process::exit(e.exit_code());
        }
    }
}

#[allow(clippy::print_stdout)]
fn print_page(state: &AppState, page: &str) {
    println!("{}", views::Header::new(state));
    println!("{page}");
}
