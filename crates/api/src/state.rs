use std::sync::Arc;
use zonekeeper_application::use_cases::{
    AddRecordUseCase, BulkUpdateUseCase, ConnectUseCase, DeleteRecordsUseCase,
    GetAuditLogsUseCase, ListRecordsUseCase, UpdateRecordUseCase,
};

#[derive(Clone)]
pub struct AppState {
    pub connect: Arc<ConnectUseCase>,
    pub list_records: Arc<ListRecordsUseCase>,
    pub add_record: Arc<AddRecordUseCase>,
    pub update_record: Arc<UpdateRecordUseCase>,
    pub delete_records: Arc<DeleteRecordsUseCase>,
    pub bulk_update: Arc<BulkUpdateUseCase>,
    pub get_audit_logs: Arc<GetAuditLogsUseCase>,
}
