use std::fmt;

/// Connect request: DNS server, directory endpoint and a user bind.
///
/// All fields are opaque; none are format-checked.
#[derive(Clone, Default)]
pub struct Credentials {
    pub dns_server: String,
    pub directory_endpoint: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(
        dns_server: impl Into<String>,
        directory_endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            dns_server: dns_server.into(),
            directory_endpoint: directory_endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("dns_server", &self.dns_server)
            .field("directory_endpoint", &self.directory_endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
