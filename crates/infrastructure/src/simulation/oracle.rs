use zonekeeper_application::ports::ChangeOracle;

/// Rejects each change independently with probability `1 - success_rate`.
pub struct RandomChangeOracle {
    success_rate: f64,
}

impl RandomChangeOracle {
    /// `success_rate` is clamped to `[0, 1]`.
    pub fn new(success_rate: f64) -> Self {
        Self {
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

impl ChangeOracle for RandomChangeOracle {
    fn should_fail(&self) -> bool {
        fastrand::f64() >= self.success_rate
    }
}
