pub mod audit;
pub mod bulk;
pub mod health;
pub mod records;
pub mod session;

pub use audit::get_audit_logs;
pub use bulk::bulk_update;
pub use health::health_check;
pub use records::{add_record, delete_records, list_records, update_record};
pub use session::connect;
