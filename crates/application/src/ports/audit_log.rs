use async_trait::async_trait;
use zonekeeper_domain::{AuditEntry, AuditLevel};

/// Append-only audit trail.
///
/// Appending never fails and nothing is ever trimmed. Any retention policy
/// belongs in an implementation, not in the callers.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Appends one entry. `None` records the default actor.
    async fn record(&self, level: AuditLevel, message: String, actor: Option<&str>);

    /// Snapshot of every entry in append order.
    async fn entries(&self) -> Vec<AuditEntry>;

    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
