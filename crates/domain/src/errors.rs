use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("hostname not found: {0}")]
    HostnameUnavailable(String),

    #[error("DNS lookup failed: {0}")]
    LookupFailed(String),

    #[error("{0}")]
    RecordReadFailure(String),

    #[error("{0}")]
    RecordParseFailure(String),

    #[error("unable to persist caller info: {0}")]
    PersistFailure(String),
}
