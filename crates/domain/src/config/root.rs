use super::{AuditConfig, AuthConfig, ConfigError, LoggingConfig, ServerConfig, SimulationConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,

    #[serde(default)]
    pub audit: AuditConfig,
}

/// Values supplied on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub instant: bool,
}

impl Config {
    /// Loads configuration from `path` (or defaults when `None`) and applies
    /// command-line overrides on top.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&raw)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.instant {
            self.simulation = SimulationConfig {
                bulk_success_rate: self.simulation.bulk_success_rate,
                ..SimulationConfig::instant()
            };
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.is_empty() {
            return Err(ConfigError::Validation(
                "server.bind_address cannot be empty".to_string(),
            ));
        }

        let rate = self.simulation.bulk_success_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::Validation(format!(
                "simulation.bulk_success_rate must be within [0, 1], got {}",
                rate
            )));
        }

        if self.auth.username.is_empty() || self.auth.password.is_empty() {
            return Err(ConfigError::Validation(
                "auth.username and auth.password cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
