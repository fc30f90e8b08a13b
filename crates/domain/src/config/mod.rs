//! Configuration module for Zonekeeper
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `server`: HTTP binding
//! - `logging`: Logging settings
//! - `auth`: Accepted directory credentials
//! - `simulation`: Artificial latencies and bulk failure injection
//! - `audit`: Audit trail behaviour
//! - `errors`: Configuration errors

pub mod audit;
pub mod auth;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;
pub mod simulation;

pub use audit::AuditConfig;
pub use auth::AuthConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use simulation::SimulationConfig;
