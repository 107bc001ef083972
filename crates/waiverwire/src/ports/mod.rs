//! Ports (Interfaces)
//!
//! Abstract interfaces for the two external collaborators: the service that
//! produces a digest and the channel that delivers it.
//!
//! Implementations live in `services/` and in integration crates.

pub mod digest_source;
pub mod notifier;

// Re-exports
pub use digest_source::DigestSource;
pub use notifier::Notifier;
