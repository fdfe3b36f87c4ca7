//! Outbound delivery seam.

/// Transport that delivers a rendered message to a destination.
///
/// Implementations may fail transiently; the scheduler treats any error as
/// "not delivered" and leaves its state untouched. Use `&self` — keep any
/// mutable state behind interior mutability.
#[async_trait::async_trait]
pub trait DeliverySink: Send + Sync {
    async fn deliver(&self, to: &str, text: &str) -> anyhow::Result<()>;
}
