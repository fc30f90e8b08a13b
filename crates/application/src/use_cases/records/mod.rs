mod add_record;
mod delete_records;
mod list_records;
mod update_record;

pub use add_record::AddRecordUseCase;
pub use delete_records::DeleteRecordsUseCase;
pub use list_records::ListRecordsUseCase;
pub use update_record::UpdateRecordUseCase;
