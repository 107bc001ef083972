//! Pipeline - one fetch followed by one send
//!
//! `Start -> Fetched -> Sent -> Done`, or `Failed` from either step. A failed
//! fetch never reaches the notifier; a failed send discards the digest.

use crate::domain::{Digest, PipelineError, Stage};
use crate::ports::{DigestSource, Notifier};

/// Fetch a digest and deliver it. Returns the delivered digest.
pub async fn run<S, N>(source: &S, notifier: &N) -> Result<Digest, PipelineError>
where
    S: DigestSource + ?Sized,
    N: Notifier + ?Sized,
{
    tracing::info!("🏈 Getting recommendations with live search... ({})", Stage::Start);

    let digest = source.fetch().await.inspect_err(|e| {
        tracing::error!("❌ {} failed, {}: {}", Stage::Fetched, Stage::Failed, e);
    })?;

    tracing::info!(
        "📝 {}: digest ready ({} chars), sending via {}...",
        Stage::Fetched,
        digest.as_str().chars().count(),
        notifier.name()
    );

    notifier.send(&digest).await.inspect_err(|e| {
        tracing::error!("❌ {} failed, {}: {}", Stage::Sent, Stage::Failed, e);
    })?;

    tracing::info!("✅ {} -> {}", Stage::Sent, Stage::Done);

    Ok(digest)
}
