use async_trait::async_trait;
use tokio::sync::RwLock;
use zonekeeper_application::ports::AuditLog;
use zonekeeper_domain::{AuditEntry, AuditLevel};

/// Unbounded in-memory audit trail.
///
/// Each appended entry is mirrored to `tracing` under the `audit` target.
/// Memory grows with every action; there is no retention.
#[derive(Default)]
pub struct InMemoryAuditLog {
    entries: RwLock<Vec<AuditEntry>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AuditLog for InMemoryAuditLog {
    async fn record(&self, level: AuditLevel, message: String, actor: Option<&str>) {
        let entry = AuditEntry::new(level, message, actor);

        match entry.level {
            AuditLevel::Info => tracing::info!(target: "audit", "{}", entry),
            AuditLevel::Warning => tracing::warn!(target: "audit", "{}", entry),
            AuditLevel::Error => tracing::error!(target: "audit", "{}", entry),
        }

        self.entries.write().await.push(entry);
    }

    async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }

    async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
