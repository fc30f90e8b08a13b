//! Wires infrastructure adapters into the use cases.

use std::sync::Arc;
use tracing::info;
use zonekeeper_api::AppState;
use zonekeeper_application::{
    ports::{AuditLog, Authenticator, ChangeOracle, DelayStrategy, ZoneRepository},
    services::ZoneMutationGate,
    use_cases::{
        AddRecordUseCase, BulkUpdateUseCase, ConnectUseCase, DeleteRecordsUseCase,
        GetAuditLogsUseCase, ListRecordsUseCase, UpdateRecordUseCase,
    },
};
use zonekeeper_domain::Config;
use zonekeeper_infrastructure::{
    audit::InMemoryAuditLog,
    auth::StaticCredentialAuthenticator,
    repositories::InMemoryZoneRepository,
    simulation::{ConfiguredDelay, RandomChangeOracle},
};

pub fn build_app_state(config: &Config) -> AppState {
    let zones: Arc<dyn ZoneRepository> = Arc::new(InMemoryZoneRepository::seeded());
    let audit: Arc<dyn AuditLog> = Arc::new(InMemoryAuditLog::new());
    let authenticator: Arc<dyn Authenticator> =
        Arc::new(StaticCredentialAuthenticator::from_config(&config.auth));
    let oracle: Arc<dyn ChangeOracle> =
        Arc::new(RandomChangeOracle::new(config.simulation.bulk_success_rate));
    let delay: Arc<dyn DelayStrategy> =
        Arc::new(ConfiguredDelay::from_config(&config.simulation));
    let gate = Arc::new(ZoneMutationGate::new());

    info!(
        bulk_success_rate = config.simulation.bulk_success_rate,
        log_audit_reads = config.audit.log_reads,
        "Services wired"
    );

    AppState {
        connect: Arc::new(ConnectUseCase::new(
            authenticator,
            zones.clone(),
            audit.clone(),
            delay.clone(),
        )),
        list_records: Arc::new(ListRecordsUseCase::new(zones.clone(), audit.clone())),
        add_record: Arc::new(AddRecordUseCase::new(
            zones.clone(),
            audit.clone(),
            delay.clone(),
            gate.clone(),
        )),
        update_record: Arc::new(UpdateRecordUseCase::new(
            zones.clone(),
            audit.clone(),
            delay.clone(),
            gate.clone(),
        )),
        delete_records: Arc::new(DeleteRecordsUseCase::new(
            zones.clone(),
            audit.clone(),
            delay.clone(),
            gate.clone(),
        )),
        bulk_update: Arc::new(BulkUpdateUseCase::new(
            zones,
            audit.clone(),
            oracle,
            delay,
            gate,
        )),
        get_audit_logs: Arc::new(GetAuditLogsUseCase::new(audit, config.audit.log_reads)),
    }
}
