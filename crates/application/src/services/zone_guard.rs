use zonekeeper_domain::{AuditLevel, DomainError};

use crate::ports::{AuditLog, ZoneRepository};

/// Fails with `ZoneNotFound` (audited as a warning) when `zone` is unknown.
///
/// `attempt` completes the sentence "Attempted to ... non-existent zone".
pub async fn require_zone(
    zone_repo: &dyn ZoneRepository,
    audit: &dyn AuditLog,
    zone: &str,
    attempt: &str,
) -> Result<(), DomainError> {
    if zone_repo.contains_zone(zone).await {
        return Ok(());
    }

    audit
        .record(
            AuditLevel::Warning,
            format!("Attempted to {} non-existent zone: {}", attempt, zone),
            None,
        )
        .await;

    Err(DomainError::ZoneNotFound(zone.to_string()))
}
