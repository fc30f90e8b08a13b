pub mod audit;
pub mod bulk;
pub mod records;
pub mod session;

pub use audit::AuditLogsResponse;
pub use bulk::{BulkUpdateRequest, BulkUpdateResponse, FailedChangeResponse};
pub use records::{
    AddRecordResponse, DeleteRecordsRequest, DeleteRecordsResponse, FailedDeletionResponse,
    MessageResponse, RecordKeyPayload, RecordsQuery, RecordsResponse,
};
pub use session::{ConnectRequest, ConnectResponse};
