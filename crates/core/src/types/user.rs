//! Signed-in shopper.

use serde::{Deserialize, Serialize};

/// The current shopper.
///
/// Nothing about a `User` is verified: login and registration fabricate one
/// from whatever the form submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Email exactly as typed.
    pub email: String,
}

impl User {
    /// Create a user from a name and email.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Build a user whose display name is the local part of `email`.
    ///
    /// ```
    /// use sidabukke_core::User;
    ///
    /// assert_eq!(User::from_email("budi@example.com").name, "budi");
    /// assert_eq!(User::from_email("no-at-sign").name, "no-at-sign");
    /// ```
    #[must_use]
    pub fn from_email(email: &str) -> Self {
        Self::new(display_name_from_email(email), email)
    }
}

/// Everything before the first `@`, or the whole input when there is none.
#[must_use]
pub fn display_name_from_email(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_from_email() {
        assert_eq!(display_name_from_email("user@example.com"), "user");
        assert_eq!(display_name_from_email("a.b+tag@x.co"), "a.b+tag");
        assert_eq!(display_name_from_email("@domain.com"), "");
        assert_eq!(display_name_from_email(""), "");
    }

    #[test]
    fn test_serde_shape() {
        let user = User::new("Budi", "budi@example.com");
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["name"], "Budi");
        assert_eq!(json["email"], "budi@example.com");
    }

    #[test]
    fn test_null_user_roundtrip() {
        let none: Option<User> = serde_json::from_str("null").unwrap();
        assert!(none.is_none());
    }
}
