//! Email Integration for Waiverwire
//!
//! Delivers a digest as a single plain-text email over an implicit-TLS SMTP
//! session.
//!
//! # Usage
//!
//! ```rust,ignore
//! use waiverwire::MailConfig;
//! use waiverwire_integration_email::SmtpNotifier;
//!
//! let notifier = SmtpNotifier::new(MailConfig::from_env()?)?;
//! notifier.send(&digest).await?;
//! ```

mod message;
mod notifier;

pub use message::{OutgoingEmail, SUBJECT};
pub use notifier::SmtpNotifier;
