//! Domain Errors
//!
//! Error types for configuration, fetching and delivery.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors, raised before any network call
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Required environment variable '{key}' is not set")]
    Missing { key: String },

    #[error("Invalid value for '{key}': {message}")]
    Invalid { key: String, message: String },

    #[error("Invalid search profile {path:?}: {message}")]
    Profile { path: PathBuf, message: String },
}

impl ConfigError {
    pub fn missing<T: AsRef<str>>(key: T) -> Self {
        Self::Missing {
            key: key.as_ref().to_string(),
        }
    }

    pub fn invalid<T: AsRef<str>>(key: T, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.as_ref().to_string(),
            message: message.into(),
        }
    }
}

/// Errors from the search API call
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Grok API error: {0}")]
    Api(String),

    #[error("Response contained no choices")]
    EmptyChoices,

    #[error("Response contained no message content")]
    EmptyContent,
}

/// Errors from the mail session
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Invalid email address '{address}': {message}")]
    Address { address: String, message: String },

    #[error("Failed to build message: {0}")]
    Message(String),

    #[error("SMTP error: {0}")]
    Smtp(String),

    #[error("Relay rejected message ({code}): {message}")]
    Rejected { code: String, message: String },
}

/// Position in the `Start -> Fetched -> Sent -> Done` sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    Fetched,
    Sent,
    Done,
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Start => "start",
            Stage::Fetched => "fetched",
            Stage::Sent => "sent",
            Stage::Done => "done",
            Stage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Failure of a pipeline run
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Fetching recommendations failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Sending email failed: {0}")]
    Delivery(#[from] DeliveryError),
}

impl PipelineError {
    /// Stage the run failed to reach
    pub fn stage(&self) -> Stage {
        match self {
            Self::Fetch(_) => Stage::Fetched,
            Self::Delivery(_) => Stage::Sent,
        }
    }
}
