use crate::ports::HostLookup;
use hostinfo_domain::DomainError;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Why canonical name resolution stopped short and the short hostname
/// was returned instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    #[error("forward lookup failed: {0}")]
    ForwardLookup(DomainError),

    #[error("no IPv4 address among {0} resolved addresses")]
    NoIpv4Address(usize),

    #[error("reverse lookup of {ip} failed: {source}")]
    ReverseLookup { ip: Ipv4Addr, source: DomainError },

    #[error("reverse lookup of {0} returned no names")]
    NoPtrName(Ipv4Addr),
}

/// Use case: report the fully-qualified domain name of this host.
///
/// Only a missing OS hostname is an error. Every DNS step that fails
/// degrades to the short hostname.
pub struct ResolveFqdnUseCase {
    lookup: Arc<dyn HostLookup>,
}

impl ResolveFqdnUseCase {
    pub fn new(lookup: Arc<dyn HostLookup>) -> Self {
        Self { lookup }
    }

    pub async fn execute(&self) -> Result<String, DomainError> {
        let hostname = self.lookup.local_hostname()?;

        match self.canonical_name(&hostname).await {
            Ok(fqdn) => {
                debug!(hostname = %hostname, fqdn = %fqdn, "FQDN resolved");
                Ok(fqdn)
            }
            Err(reason) => {
                debug!(hostname = %hostname, reason = %reason, "Falling back to short hostname");
                Ok(hostname)
            }
        }
    }

    async fn canonical_name(&self, hostname: &str) -> Result<String, FallbackReason> {
        let addrs = self
            .lookup
            .lookup_ip(hostname)
            .await
            .map_err(FallbackReason::ForwardLookup)?;

        let ip = first_ipv4(&addrs).ok_or(FallbackReason::NoIpv4Address(addrs.len()))?;

        let names = self
            .lookup
            .lookup_addr(IpAddr::V4(ip))
            .await
            .map_err(|source| FallbackReason::ReverseLookup { ip, source })?;

        let name = names
            .iter()
            .find(|name| !name.is_empty())
            .ok_or(FallbackReason::NoPtrName(ip))?;

        Ok(strip_root_label(name).to_string())
    }
}

/// First IPv4 address in resolver order. IPv4-mapped IPv6 addresses count.
pub fn first_ipv4(addrs: &[IpAddr]) -> Option<Ipv4Addr> {
    addrs.iter().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    })
}

/// Remove a single trailing "." (the DNS root label).
pub fn strip_root_label(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}
