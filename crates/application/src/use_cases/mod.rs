pub mod audit;
pub mod bulk;
pub mod records;
pub mod session;

// Re-export use cases
pub use audit::GetAuditLogsUseCase;
pub use bulk::BulkUpdateUseCase;
pub use records::{AddRecordUseCase, DeleteRecordsUseCase, ListRecordsUseCase, UpdateRecordUseCase};
pub use session::ConnectUseCase;
