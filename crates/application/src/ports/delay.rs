use async_trait::async_trait;

/// Operations that carry a simulated round-trip latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulatedOperation {
    Connect,
    /// Single add or update
    Write,
    /// One record of a delete batch
    Delete,
    /// One change of a bulk update
    BulkChange,
}

#[async_trait]
pub trait DelayStrategy: Send + Sync {
    async fn pause(&self, operation: SimulatedOperation);
}
