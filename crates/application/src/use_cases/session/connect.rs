use std::sync::Arc;
use tracing::{info, instrument, warn};
use zonekeeper_domain::{AuditLevel, Credentials, DomainError};

use crate::ports::{AuditLog, Authenticator, DelayStrategy, SimulatedOperation, ZoneRepository};

/// Use case for the connect handshake: authenticate, then discover zones.
pub struct ConnectUseCase {
    authenticator: Arc<dyn Authenticator>,
    zone_repo: Arc<dyn ZoneRepository>,
    audit: Arc<dyn AuditLog>,
    delay: Arc<dyn DelayStrategy>,
}

impl ConnectUseCase {
    pub fn new(
        authenticator: Arc<dyn Authenticator>,
        zone_repo: Arc<dyn ZoneRepository>,
        audit: Arc<dyn AuditLog>,
        delay: Arc<dyn DelayStrategy>,
    ) -> Self {
        Self {
            authenticator,
            zone_repo,
            audit,
            delay,
        }
    }

    /// Returns the names of the zones visible to the authenticated user.
    ///
    /// # Errors
    ///
    /// * `DomainError::AuthenticationFailed` - The credentials were rejected
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn execute(&self, credentials: &Credentials) -> Result<Vec<String>, DomainError> {
        let actor = Some(credentials.username.as_str());

        self.audit
            .record(
                AuditLevel::Info,
                format!(
                    "Attempting connection to {} with user {}",
                    credentials.dns_server, credentials.username
                ),
                actor,
            )
            .await;

        self.delay.pause(SimulatedOperation::Connect).await;

        if !self.authenticator.authenticate(credentials).await {
            self.audit
                .record(
                    AuditLevel::Error,
                    "Connection failed: Invalid credentials.".to_string(),
                    actor,
                )
                .await;
            warn!("Authentication rejected");
            return Err(DomainError::AuthenticationFailed);
        }

        self.audit
            .record(
                AuditLevel::Info,
                "Connection and authentication successful.".to_string(),
                actor,
            )
            .await;

        let zones = self.zone_repo.zone_names().await;
        info!(zones = zones.len(), "Connection established");

        Ok(zones)
    }
}
