/// Decides whether an otherwise valid bulk change is rejected by an injected
/// failure.
pub trait ChangeOracle: Send + Sync {
    fn should_fail(&self) -> bool;
}
