use serde::{Deserialize, Serialize};

/// The most recent client that queried the hostname endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CallerRecord {
    /// `Host` the client addressed the request to.
    pub host: String,

    /// Peer socket address of the client, `ip:port`.
    #[serde(rename = "remote_addr")]
    pub remote_address: String,
}

impl CallerRecord {
    pub fn new(host: impl Into<String>, remote_address: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            remote_address: remote_address.into(),
        }
    }
}
