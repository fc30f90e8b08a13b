use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use zonekeeper_application::ports::ZoneRepository;
use zonekeeper_domain::{DnsRecord, DomainError, RecordFilter, RecordKey, Zone};

use super::seed::seed_zones;

/// Zone store held entirely in memory.
///
/// The zone key set is fixed at construction; records inside each zone are
/// mutated in place. Zones iterate in name order.
pub struct InMemoryZoneRepository {
    zones: RwLock<BTreeMap<String, Zone>>,
}

impl InMemoryZoneRepository {
    pub fn new(zones: Vec<Zone>) -> Self {
        let zones = zones.into_iter().map(|z| (z.name.clone(), z)).collect();
        Self {
            zones: RwLock::new(zones),
        }
    }

    /// Store populated with the built-in seed dataset.
    pub fn seeded() -> Self {
        Self::new(seed_zones())
    }

    async fn read_zone<T>(
        &self,
        zone: &str,
        f: impl FnOnce(&Zone) -> T,
    ) -> Result<T, DomainError> {
        let zones = self.zones.read().await;
        zones
            .get(zone)
            .map(f)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))
    }

    async fn write_zone<T>(
        &self,
        zone: &str,
        f: impl FnOnce(&mut Zone) -> T,
    ) -> Result<T, DomainError> {
        let mut zones = self.zones.write().await;
        zones
            .get_mut(zone)
            .map(f)
            .ok_or_else(|| DomainError::ZoneNotFound(zone.to_string()))
    }
}

impl Default for InMemoryZoneRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl ZoneRepository for InMemoryZoneRepository {
    async fn zone_names(&self) -> Vec<String> {
        self.zones.read().await.keys().cloned().collect()
    }

    async fn contains_zone(&self, zone: &str) -> bool {
        self.zones.read().await.contains_key(zone)
    }

    #[instrument(skip(self, filter))]
    async fn list(
        &self,
        zone: &str,
        filter: &RecordFilter,
    ) -> Result<Vec<DnsRecord>, DomainError> {
        self.read_zone(zone, |z| z.filtered(filter)).await
    }

    #[instrument(skip(self))]
    async fn append(&self, zone: &str, record: DnsRecord) -> Result<(), DomainError> {
        self.write_zone(zone, |z| z.append(record)).await
    }

    #[instrument(skip(self))]
    async fn update_first(
        &self,
        zone: &str,
        key: &RecordKey,
        new_value: &str,
    ) -> Result<bool, DomainError> {
        let matched = self
            .write_zone(zone, |z| z.update_first(key, new_value))
            .await?;
        debug!(matched, "Update applied");
        Ok(matched)
    }

    #[instrument(skip(self))]
    async fn remove_all(&self, zone: &str, key: &RecordKey) -> Result<usize, DomainError> {
        let removed = self.write_zone(zone, |z| z.remove_all(key)).await?;
        debug!(removed, "Records removed");
        Ok(removed)
    }
}
