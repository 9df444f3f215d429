//! Unified error handling for front ends.
//!
//! Storage failures never reach this type: the store container logs and
//! swallows them. What remains are the shopper-facing outcomes of a command.

use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Checkout was turned away.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Product or order not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad input from the shopper.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Whether this is a "nothing there" outcome that a front end should
    /// render as a message rather than treat as failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Process exit code for command-line front ends.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 0,
            Self::Checkout(_) | Self::BadRequest(_) => 2,
            Self::Config(_) => 78,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product sid999".to_string());
        assert_eq!(err.to_string(), "Not found: product sid999");

        let err = AppError::from(CheckoutError::EmptyCart);
        assert_eq!(err.to_string(), "Checkout error: cart is empty");
    }

    #[test]
    fn test_app_error_exit_codes() {
        assert_eq!(AppError::NotFound(String::new()).exit_code(), 0);
        assert!(AppError::NotFound(String::new()).is_not_found());
        assert_eq!(
            AppError::Checkout(CheckoutError::MissingField("name")).exit_code(),
            2
        );
        assert_eq!(
            AppError::Config(ConfigError::InvalidEnvVar("X".into(), "y".into())).exit_code(),
            78
        );
    }
}
