use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// Per-item reason in a delete batch: the key removed nothing.
    #[error("Record not found or failed to delete")]
    DeletionFailed,

    /// Per-item reason in a bulk batch: an update's old triple matched nothing.
    #[error("record not found for update")]
    UpdateTargetNotFound,

    #[error("Invalid credentials")]
    AuthenticationFailed,

    #[error("Simulated failure")]
    SimulatedFailure,
}
