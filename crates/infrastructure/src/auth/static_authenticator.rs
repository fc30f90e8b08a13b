use async_trait::async_trait;
use subtle::ConstantTimeEq;
use zonekeeper_application::ports::Authenticator;
use zonekeeper_domain::{config::AuthConfig, Credentials};

/// Accepts exactly one configured username/password pair.
///
/// Stand-in for a directory bind. The server and endpoint fields are not
/// checked. Both comparisons always run so a rejection takes the same path
/// whichever field was wrong.
pub struct StaticCredentialAuthenticator {
    username: String,
    password: String,
}

impl StaticCredentialAuthenticator {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

#[async_trait]
impl Authenticator for StaticCredentialAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> bool {
        let user_ok = credentials
            .username
            .as_bytes()
            .ct_eq(self.username.as_bytes());
        let pass_ok = credentials
            .password
            .as_bytes()
            .ct_eq(self.password.as_bytes());

        (user_ok & pass_ok).into()
    }
}
