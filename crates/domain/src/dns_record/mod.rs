pub mod key;
pub mod record;
pub mod record_type;

pub use key::RecordKey;
pub use record::DnsRecord;
pub use record_type::RecordType;
