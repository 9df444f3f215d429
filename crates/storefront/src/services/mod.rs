//! Demo services behind the account and support pages.
//!
//! None of these talk to anything: credentials are accepted as submitted,
//! and reset links and support messages are only logged.

pub mod auth;
pub mod support;
