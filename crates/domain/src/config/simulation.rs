use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Artificial latencies and failure injection.
///
/// Delays only shape perceived responsiveness and carry no correctness
/// contract; set them all to zero for tests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Delay before answering a connect request (default: 2000)
    #[serde(default = "default_connect_delay_ms")]
    pub connect_delay_ms: u64,

    /// Delay for single add/update operations (default: 1000)
    #[serde(default = "default_write_delay_ms")]
    pub write_delay_ms: u64,

    /// Delay per record in a delete batch (default: 500)
    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u64,

    /// Delay per change in a bulk update (default: 200)
    #[serde(default = "default_bulk_change_delay_ms")]
    pub bulk_change_delay_ms: u64,

    /// Probability in [0, 1] that a well-formed bulk change is applied (default: 0.9)
    #[serde(default = "default_bulk_success_rate")]
    pub bulk_success_rate: f64,
}

impl SimulationConfig {
    /// Zero delays, every bulk change applied.
    pub fn instant() -> Self {
        Self {
            connect_delay_ms: 0,
            write_delay_ms: 0,
            delete_delay_ms: 0,
            bulk_change_delay_ms: 0,
            bulk_success_rate: 1.0,
        }
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn write_delay(&self) -> Duration {
        Duration::from_millis(self.write_delay_ms)
    }

    pub fn delete_delay(&self) -> Duration {
        Duration::from_millis(self.delete_delay_ms)
    }

    pub fn bulk_change_delay(&self) -> Duration {
        Duration::from_millis(self.bulk_change_delay_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            connect_delay_ms: default_connect_delay_ms(),
            write_delay_ms: default_write_delay_ms(),
            delete_delay_ms: default_delete_delay_ms(),
            bulk_change_delay_ms: default_bulk_change_delay_ms(),
            bulk_success_rate: default_bulk_success_rate(),
        }
    }
}

fn default_connect_delay_ms() -> u64 {
    2000
}

fn default_write_delay_ms() -> u64 {
    1000
}

fn default_delete_delay_ms() -> u64 {
    500
}

fn default_bulk_change_delay_ms() -> u64 {
    200
}

fn default_bulk_success_rate() -> f64 {
    0.9
}
