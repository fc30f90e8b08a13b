use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Actor recorded when an action has no known user.
pub const DEFAULT_ACTOR: &str = "Backend";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
}

impl AuditLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditLevel::Info => "INFO",
            AuditLevel::Warning => "WARNING",
            AuditLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One immutable line of the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub level: AuditLevel,
    pub actor: String,
    pub message: String,
}

impl AuditEntry {
    pub fn new(level: AuditLevel, message: impl Into<String>, actor: Option<&str>) -> Self {
        Self::at(Local::now(), level, message, actor)
    }

    pub fn at(
        timestamp: DateTime<Local>,
        level: AuditLevel,
        message: impl Into<String>,
        actor: Option<&str>,
    ) -> Self {
        Self {
            timestamp,
            level,
            actor: actor.unwrap_or(DEFAULT_ACTOR).to_string(),
            message: message.into(),
        }
    }
}

/// `[YYYY-MM-DD HH:MM:SS] LEVEL - User: actor - message`
impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} - User: {} - {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level,
            self.actor,
            self.message
        )
    }
}
