use async_trait::async_trait;
use zonekeeper_domain::{DnsRecord, DomainError, RecordFilter, RecordKey};

/// Repository interface for the zone store.
///
/// Every zone-scoped method returns `DomainError::ZoneNotFound` when the
/// zone is not part of the store. Implementations serialize their own
/// mutations; callers that need several calls to appear atomic hold a
/// [`ZoneMutationGate`](crate::services::ZoneMutationGate) around them.
#[async_trait]
pub trait ZoneRepository: Send + Sync {
    /// Names of all zones, in the store's iteration order.
    async fn zone_names(&self) -> Vec<String>;

    async fn contains_zone(&self, zone: &str) -> bool;

    /// Records of `zone` passing `filter`, in insertion order.
    async fn list(&self, zone: &str, filter: &RecordFilter)
        -> Result<Vec<DnsRecord>, DomainError>;

    /// Appends `record` at the end of the zone. No duplicate check.
    async fn append(&self, zone: &str, record: DnsRecord) -> Result<(), DomainError>;

    /// Sets the value of the first record matching `key`.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - A record matched and was rewritten
    /// * `Ok(false)` - No record matched
    async fn update_first(
        &self,
        zone: &str,
        key: &RecordKey,
        new_value: &str,
    ) -> Result<bool, DomainError>;

    /// Removes every record matching `key` and returns how many went away.
    async fn remove_all(&self, zone: &str, key: &RecordKey) -> Result<usize, DomainError>;
}
