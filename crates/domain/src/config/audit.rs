use serde::{Deserialize, Serialize};

/// Audit trail configuration.
///
/// The trail itself is unbounded: entries are never trimmed, so a
/// long-running instance polled for its logs grows without limit.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuditConfig {
    /// Append an "Audit logs requested" entry on every read (default: true)
    #[serde(default = "default_true")]
    pub log_reads: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self { log_reads: true }
    }
}

fn default_true() -> bool {
    true
}
