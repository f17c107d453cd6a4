use hostinfo_domain::CallerRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerResponse {
    pub host: String,
    pub remote_addr: String,
}

impl From<CallerRecord> for CallerResponse {
    fn from(record: CallerRecord) -> Self {
        Self {
            host: record.host,
            remote_addr: record.remote_address,
        }
    }
}

/// Current FQDN plus the last recorded caller. `caller` is `null` when
/// persistence is disabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerInfoResponse {
    pub hostname: String,
    pub caller: Option<CallerResponse>,
}
