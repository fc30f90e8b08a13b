mod bulk_update;

pub use bulk_update::BulkUpdateUseCase;
