use async_trait::async_trait;
use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::RwLock;
use zonekeeper_application::ports::{
    AuditLog, Authenticator, ChangeOracle, DelayStrategy, SimulatedOperation, ZoneRepository,
};
use zonekeeper_application::services::ZoneMutationGate;
use zonekeeper_application::use_cases::{
    AddRecordUseCase, BulkUpdateUseCase, ConnectUseCase, DeleteRecordsUseCase,
    GetAuditLogsUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};
use zonekeeper_domain::{
    AuditEntry, AuditLevel, Credentials, DnsRecord, DomainError, RecordFilter, RecordKey, Zone,
};

// ============================================================================
// Mock ZoneRepository
// ============================================================================

#[derive(Clone, Default)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<BTreeMap<String, Zone>>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zones(zones: Vec<Zone>) -> Self {
        let map = zones.into_iter().map(|z| (z.name.clone(), z)).collect();
        Self {
            zones: Arc::new(RwLock::new(map)),
        }
    }

    /// `example.com` with five records and `sub.example.com` with two.
    pub fn example() -> Self {
        Self::with_zones(vec![
            Zone::new(
                "example.com",
                vec![
                    DnsRecord::new("www", "A", "192.168.1.100"),
                    DnsRecord::new("api", "CNAME", "www.example.com"),
                    DnsRecord::new("mail", "MX", "mail.example.com"),
                    DnsRecord::new("txttest", "TXT", "v=spf1 include:_spf.google.com ~all"),
                    DnsRecord::new("srvtest", "SRV", "0 5 5060 sip.example.com"),
                ],
            ),
            Zone::new(
                "sub.example.com",
                vec![
                    DnsRecord::new("dev", "A", "192.168.1.101"),
                    DnsRecord::new("test", "A", "192.168.1.102"),
                ],
            ),
        ])
    }

    pub async fn records(&self, zone: &str) -> Vec<DnsRecord> {
        self.zones
            .read()
            .await
            .get(zone)
            .map(|z| z.records.clone())
            .unwrap_or_default()
    }

    async fn with_zone<T>(
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

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn zone_names(&self) -> Vec<String> {
        self.zones.read().await.keys().cloned().collect()
    }

    async fn contains_zone(&self, zone: &str) -> bool {
        self.zones.read().await.contains_key(zone)
    }

    async fn list(&self, zone: &str, filter: &RecordFilter) -> Result<Vec<DnsRecord>, DomainError> {
        self.with_zone(zone, |z| z.filtered(filter)).await
    }

    async fn append(&self, zone: &str, record: DnsRecord) -> Result<(), DomainError> {
        self.with_zone(zone, |z| z.append(record)).await
    }

    async fn update_first(
        &self,
        zone: &str,
        key: &RecordKey,
        new_value: &str,
    ) -> Result<bool, DomainError> {
        self.with_zone(zone, |z| z.update_first(key, new_value)).await
    }

    async fn remove_all(&self, zone: &str, key: &RecordKey) -> Result<usize, DomainError> {
        self.with_zone(zone, |z| z.remove_all(key)).await
    }
}

// ============================================================================
// Mock AuditLog
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingAuditLog {
    entries: Arc<Mutex<Vec<AuditEntry>>>,
}

impl RecordingAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<AuditEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn levels(&self) -> Vec<AuditLevel> {
        self.snapshot().into_iter().map(|e| e.level).collect()
    }

    pub fn last(&self) -> Option<AuditEntry> {
        self.entries.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AuditLog for RecordingAuditLog {
    async fn record(&self, level: AuditLevel, message: String, actor: Option<&str>) {
        self.entries
            .lock()
            .unwrap()
            .push(AuditEntry::new(level, message, actor));
    }

    async fn entries(&self) -> Vec<AuditEntry> {
        self.snapshot()
    }

    async fn len(&self) -> usize {
        self.count()
    }
}

// ============================================================================
// Oracles, delays, authenticator
// ============================================================================

/// Same answer for every change.
pub struct FixedOracle {
    fail: bool,
}

impl FixedOracle {
    pub fn always_apply() -> Self {
        Self { fail: false }
    }

    pub fn always_fail() -> Self {
        Self { fail: true }
    }
}

impl ChangeOracle for FixedOracle {
    fn should_fail(&self) -> bool {
        self.fail
    }
}

/// Replays a fixed sequence of outcomes, then applies everything.
pub struct ScriptedOracle {
    outcomes: Mutex<VecDeque<bool>>,
}

impl ScriptedOracle {
    pub fn new(fail_sequence: Vec<bool>) -> Self {
        Self {
            outcomes: Mutex::new(fail_sequence.into()),
        }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.lock().unwrap().len()
    }
}

impl ChangeOracle for ScriptedOracle {
    fn should_fail(&self) -> bool {
        self.outcomes.lock().unwrap().pop_front().unwrap_or(false)
    }
}

/// Records requested pauses without sleeping.
#[derive(Default)]
pub struct RecordingDelay {
    calls: Mutex<Vec<SimulatedOperation>>,
}

impl RecordingDelay {
    pub fn calls(&self) -> Vec<SimulatedOperation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DelayStrategy for RecordingDelay {
    async fn pause(&self, operation: SimulatedOperation) {
        self.calls.lock().unwrap().push(operation);
    }
}

/// Sleeps for a fixed duration on every pause. Pair with a paused clock.
pub struct SleepingDelay {
    per_pause: Duration,
}

impl SleepingDelay {
    pub fn new(per_pause: Duration) -> Self {
        Self { per_pause }
    }
}

#[async_trait]
impl DelayStrategy for SleepingDelay {
    async fn pause(&self, _operation: SimulatedOperation) {
        tokio::time::sleep(self.per_pause).await;
    }
}

pub struct MockAuthenticator {
    username: String,
    password: String,
}

impl MockAuthenticator {
    pub fn accepting(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

#[async_trait]
impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}

// ============================================================================
// Wiring
// ============================================================================

/// All use cases over shared mocks.
pub struct Harness {
    pub zones: Arc<MockZoneRepository>,
    pub audit: Arc<RecordingAuditLog>,
    pub delay: Arc<RecordingDelay>,
    pub connect: ConnectUseCase,
    pub list: ListRecordsUseCase,
    pub add: AddRecordUseCase,
    pub update: UpdateRecordUseCase,
    pub delete: DeleteRecordsUseCase,
    pub bulk: BulkUpdateUseCase,
    pub logs: GetAuditLogsUseCase,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_oracle(Arc::new(FixedOracle::always_apply()))
    }

    pub fn with_oracle(oracle: Arc<dyn ChangeOracle>) -> Self {
        let zones = Arc::new(MockZoneRepository::example());
        let audit = Arc::new(RecordingAuditLog::new());
        let delay = Arc::new(RecordingDelay::default());
        let gate = Arc::new(ZoneMutationGate::new());
        let auth = Arc::new(MockAuthenticator::accepting("admin@example.com", "password"));

        Self {
            connect: ConnectUseCase::new(auth, zones.clone(), audit.clone(), delay.clone()),
            list: ListRecordsUseCase::new(zones.clone(), audit.clone()),
            add: AddRecordUseCase::new(zones.clone(), audit.clone(), delay.clone(), gate.clone()),
            update: UpdateRecordUseCase::new(
                zones.clone(),
                audit.clone(),
                delay.clone(),
                gate.clone(),
            ),
            delete: DeleteRecordsUseCase::new(
                zones.clone(),
                audit.clone(),
                delay.clone(),
                gate.clone(),
            ),
            bulk: BulkUpdateUseCase::new(zones.clone(), audit.clone(), oracle, delay.clone(), gate),
            logs: GetAuditLogsUseCase::new(audit.clone(), true),
            zones,
            audit,
            delay,
        }
    }
}
