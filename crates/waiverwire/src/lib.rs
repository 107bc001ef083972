//! Waiverwire Domain Library
//!
//! Fetches a weekly waiver wire digest from Grok Live Search and hands it
//! to a notifier for delivery.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Digest, SearchProfile and error types
//! - **Ports** (`ports/`): `DigestSource` and `Notifier` traits
//! - **Services** (`services/`): the Grok chat-completions client
//! - **Pipeline** (`pipeline`): one fetch followed by one send
//!
//! Delivery implementations live in separate crates
//! (e.g., waiverwire-integration-email).
//!
//! # Usage
//!
//! ```rust,ignore
//! use waiverwire::{pipeline, Config, GrokClient, SearchProfile};
//!
//! let config = Config::from_env()?;
//! let source = GrokClient::new(config.search.clone(), SearchProfile::default());
//! pipeline::run(&source, &notifier).await?;
//! ```

pub mod config;
pub mod domain;
pub mod pipeline;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use config::{Config, MailConfig, SearchConfig};
pub use domain::{
    ConfigError, DeliveryError, Digest, FetchError, PipelineError, SearchMode, SearchOptions,
    SearchProfile, SourceKind, Stage,
};
pub use ports::{DigestSource, Notifier};
pub use services::grok::GrokClient;
