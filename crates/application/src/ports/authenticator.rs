use async_trait::async_trait;
use zonekeeper_domain::Credentials;

/// Decides whether a connect request may proceed.
///
/// Implementations must not reveal which field was wrong.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn authenticate(&self, credentials: &Credentials) -> bool;
}
