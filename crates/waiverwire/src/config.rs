//! Runtime configuration
//!
//! Built once at startup from environment variables and passed by reference
//! into the fetcher and the notifier. Nothing below the binary reads the
//! environment on its own.
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `GROK_API_KEY` | Yes | Bearer token for the search API |
//! | `SENDER_EMAIL` | Yes | From address and SMTP username |
//! | `EMAIL_PASSWORD` | Yes | SMTP password |
//! | `RECIPIENT_EMAIL` | Yes | To address |
//! | `GROK_API_URL` | No | Endpoint (default: xAI chat completions) |
//! | `SMTP_HOST` | No | Relay host (default: smtp.gmail.com) |
//! | `SMTP_PORT` | No | Implicit-TLS port (default: 465) |

use std::fmt;

use crate::domain::ConfigError;

pub const GROK_API_KEY: &str = "GROK_API_KEY";
pub const GROK_API_URL: &str = "GROK_API_URL";
pub const SENDER_EMAIL: &str = "SENDER_EMAIL";
pub const EMAIL_PASSWORD: &str = "EMAIL_PASSWORD";
pub const RECIPIENT_EMAIL: &str = "RECIPIENT_EMAIL";
pub const SMTP_HOST: &str = "SMTP_HOST";
pub const SMTP_PORT: &str = "SMTP_PORT";

pub const DEFAULT_API_URL: &str = "https://api.x.ai/v1/chat/completions";
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Search API settings
#[derive(Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub api_key: String,
    pub endpoint: String,
}

/// Mail relay settings
#[derive(Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub sender: String,
    pub password: String,
    pub recipient: String,
    pub smtp_host: String,
    pub smtp_port: u16,
}

/// Full configuration for a fetch-and-send run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub search: SearchConfig,
    pub mail: MailConfig,
}

impl Config {
    /// Load every setting from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    /// Load every setting through `lookup`. Fails on the first missing
    /// required value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            search: SearchConfig::from_lookup(&lookup)?,
            mail: MailConfig::from_lookup(&lookup)?,
        })
    }
}

impl SearchConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_API_URL.to_string(),
        }
    }

    /// Override the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require(&lookup, GROK_API_KEY)?;
        let endpoint =
            optional(&lookup, GROK_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self { api_key, endpoint })
    }
}

impl MailConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let sender = require(&lookup, SENDER_EMAIL)?;
        let password = require(&lookup, EMAIL_PASSWORD)?;
        let recipient = require(&lookup, RECIPIENT_EMAIL)?;
        let smtp_host =
            optional(&lookup, SMTP_HOST).unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let smtp_port = match optional(&lookup, SMTP_PORT) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::invalid(SMTP_PORT, format!("{raw:?}: {e}")))?,
            None => DEFAULT_SMTP_PORT,
        };

        Ok(Self {
            sender,
            password,
            recipient,
            smtp_host,
            smtp_port,
        })
    }
}

impl fmt::Debug for SearchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field("sender", &self.sender)
            .field("password", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .finish()
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Blank values count as missing.
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn require<F>(lookup: &F, key: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or_else(|| ConfigError::missing(key))
}
