mod audit_log;
mod authenticator;
mod change_oracle;
mod delay;
mod zone_repository;

pub use audit_log::AuditLog;
pub use authenticator::Authenticator;
pub use change_oracle::ChangeOracle;
pub use delay::{DelayStrategy, SimulatedOperation};
pub use zone_repository::ZoneRepository;
