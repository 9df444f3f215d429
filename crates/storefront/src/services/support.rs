//! Support contact form.

use tracing::info;

/// Submitted support message.
#[derive(Debug, Clone, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Pretend to deliver a support message.
///
/// Returns the confirmation shown to the shopper.
#[must_use]
pub fn submit(message: &ContactMessage) -> &'static str {
    info!(
        name = %message.name,
        email = %message.email,
        length = message.message.len(),
        "Support message received (demo, nothing sent)"
    );
    "Pesan terkirim (demo)"
}
