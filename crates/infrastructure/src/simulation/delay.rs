use async_trait::async_trait;
use std::time::Duration;
use zonekeeper_application::ports::{DelayStrategy, SimulatedOperation};
use zonekeeper_domain::config::SimulationConfig;

/// Sleeps for the configured latency of each operation.
pub struct ConfiguredDelay {
    connect: Duration,
    write: Duration,
    delete: Duration,
    bulk_change: Duration,
}

impl ConfiguredDelay {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            connect: config.connect_delay(),
            write: config.write_delay(),
            delete: config.delete_delay(),
            bulk_change: config.bulk_change_delay(),
        }
    }

    pub fn duration_for(&self, operation: SimulatedOperation) -> Duration {
        match operation {
            SimulatedOperation::Connect => self.connect,
            SimulatedOperation::Write => self.write,
            SimulatedOperation::Delete => self.delete,
            SimulatedOperation::BulkChange => self.bulk_change,
        }
    }
}

#[async_trait]
impl DelayStrategy for ConfiguredDelay {
    async fn pause(&self, operation: SimulatedOperation) {
        let duration = self.duration_for(operation);
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}

/// Never waits.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl DelayStrategy for NoDelay {
    async fn pause(&self, _operation: SimulatedOperation) {}
}
