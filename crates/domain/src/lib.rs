//! Zonekeeper Domain Layer
pub mod audit;
pub mod batch;
pub mod change;
pub mod config;
pub mod credentials;
pub mod dns_record;
pub mod errors;
pub mod record_filter;
pub mod validators;
pub mod zone;

pub use audit::{AuditEntry, AuditLevel, DEFAULT_ACTOR};
pub use batch::{BatchStatus, BulkReport, DeletionReport, FailedChange, FailedDeletion};
pub use change::{ChangePlan, RecordChange, RecordDraft, RecordUpdate};
pub use config::{CliOverrides, Config, ConfigError};
pub use credentials::Credentials;
pub use dns_record::{DnsRecord, RecordKey, RecordType};
pub use errors::DomainError;
pub use record_filter::{RecordFilter, TypeFilter, ALL_TYPES};
pub use zone::Zone;
