use serde::{Deserialize, Serialize};
use zonekeeper_domain::Credentials;

/// Request DTO for the connect handshake.
///
/// Field names follow the web client (`dnsServer`, `dcLdap`); snake_case
/// aliases are accepted too. Missing fields read as empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnectRequest {
    #[serde(default, rename = "dnsServer", alias = "dns_server")]
    pub dns_server: String,
    #[serde(default, rename = "dcLdap", alias = "directory_endpoint")]
    pub directory_endpoint: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl From<ConnectRequest> for Credentials {
    fn from(req: ConnectRequest) -> Self {
        Credentials::new(
            req.dns_server,
            req.directory_endpoint,
            req.username,
            req.password,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectResponse {
    pub zones: Vec<String>,
}
