//! Digest Source Port
//!
//! Abstract interface for obtaining a digest.

use async_trait::async_trait;

use crate::domain::{Digest, FetchError};

/// Service interface for producing a digest
#[async_trait]
pub trait DigestSource: Send + Sync {
    /// Fetch one digest. Called once per run, never retried.
    async fn fetch(&self) -> Result<Digest, FetchError>;
}
