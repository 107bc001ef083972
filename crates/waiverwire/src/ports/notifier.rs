//! Notifier Port
//!
//! Abstract interface for delivering a digest to its recipient.
//!
//! Implementations of this trait should live in separate crates
//! (e.g., waiverwire-integration-email).

use async_trait::async_trait;

use crate::domain::{DeliveryError, Digest};

/// Delivery channel interface
///
/// # Example
///
/// ```rust,ignore
/// use waiverwire::ports::Notifier;
///
/// struct SmtpNotifier { /* ... */ }
///
/// #[async_trait]
/// impl Notifier for SmtpNotifier {
///     async fn send(&self, digest: &Digest) -> Result<(), DeliveryError> {
///         // Build and send one email
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver the digest exactly once
    async fn send(&self, digest: &Digest) -> Result<(), DeliveryError>;

    /// Get the channel name (e.g., "email")
    fn name(&self) -> &str;
}
