use crate::{DomainError, RecordChange, RecordKey};

/// Top-level outcome of a batch operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Complete,
    Partial,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDeletion {
    pub record: RecordKey,
    pub error: DomainError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
    pub deleted_count: usize,
    pub failed: Vec<FailedDeletion>,
}

impl DeletionReport {
    pub fn status(&self) -> BatchStatus {
        if self.failed.is_empty() {
            BatchStatus::Complete
        } else {
            BatchStatus::Partial
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedChange {
    pub change: RecordChange,
    pub error: DomainError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub success_count: usize,
    pub failed: Vec<FailedChange>,
}

impl BulkReport {
    pub fn status(&self) -> BatchStatus {
        if self.failed.is_empty() {
            BatchStatus::Complete
        } else {
            BatchStatus::Partial
        }
    }
}
