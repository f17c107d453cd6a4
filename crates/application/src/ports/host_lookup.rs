use async_trait::async_trait;
use hostinfo_domain::DomainError;
use std::net::IpAddr;

/// Operating-system naming facilities the FQDN resolver is built on.
#[async_trait]
pub trait HostLookup: Send + Sync {
    /// Short hostname as reported by the OS.
    ///
    /// # Errors
    ///
    /// * `DomainError::HostnameUnavailable` - If the OS cannot report it
    fn local_hostname(&self) -> Result<String, DomainError>;

    /// Forward lookup: hostname to addresses, in resolver order.
    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError>;

    /// Reverse lookup: address to names. An empty list means no PTR record.
    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, DomainError>;
}
