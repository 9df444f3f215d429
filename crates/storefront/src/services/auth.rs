//! Mock authentication.
//!
//! Login and registration accept any input. The password is carried as a
//! [`SecretString`] so it never shows up in logs, and is dropped once the
//! form is turned into a [`User`].

use secrecy::SecretString;
use tracing::info;

use sidabukke_core::{User, display_name_from_email};

/// Submitted login form.
#[derive(Debug)]
pub struct LoginForm {
    pub email: String,
    pub password: SecretString,
}

impl LoginForm {
    /// The user this form signs in as. The display name is the email's
    /// local part.
    #[must_use]
    pub fn into_user(self) -> User {
        User::from_email(self.email.trim())
    }
}

/// Submitted registration form.
#[derive(Debug)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl RegisterForm {
    /// The user this form registers. A blank name falls back to the email's
    /// local part.
    #[must_use]
    pub fn into_user(self) -> User {
        let email = self.email.trim();
        let name = match self.name.trim() {
            "" => display_name_from_email(email),
            name => name,
        };
        User::new(name, email)
    }
}

/// Pretend to send a password reset link.
///
/// Returns the confirmation shown to the shopper.
#[must_use]
pub fn request_password_reset(email: &str) -> &'static str {
    info!(email, "Password reset requested (demo, nothing sent)");
    "Link reset password dikirim (demo)"
}
