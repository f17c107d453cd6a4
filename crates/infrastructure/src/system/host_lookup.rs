use async_trait::async_trait;
use hostinfo_application::ports::HostLookup;
use hostinfo_domain::DomainError;
use std::net::IpAddr;
use tracing::debug;

/// `HostLookup` backed by the OS resolver (gethostname, getaddrinfo,
/// getnameinfo). Honours /etc/hosts and nsswitch like any libc client.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemHostLookup;

impl SystemHostLookup {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HostLookup for SystemHostLookup {
    fn local_hostname(&self) -> Result<String, DomainError> {
        let raw = hostname::get().map_err(|e| DomainError::HostnameUnavailable(e.to_string()))?;
        raw.into_string().map_err(|raw| {
            DomainError::HostnameUnavailable(format!("hostname is not valid UTF-8: {:?}", raw))
        })
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        // getaddrinfo wants a service; the port is irrelevant.
        let socket_addrs = tokio::net::lookup_host((host, 0))
            .await
            .map_err(|e| DomainError::LookupFailed(format!("{}: {}", host, e)))?;

        let mut addrs: Vec<IpAddr> = Vec::new();
        for addr in socket_addrs {
            let ip = addr.ip();
            if !addrs.contains(&ip) {
                addrs.push(ip);
            }
        }

        debug!(host = %host, count = addrs.len(), "Forward lookup complete");
        Ok(addrs)
    }

    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        let name = tokio::task::spawn_blocking(move || dns_lookup::lookup_addr(&ip))
            .await
            .map_err(|e| DomainError::LookupFailed(format!("reverse lookup task: {}", e)))?
            .map_err(|e| DomainError::LookupFailed(format!("{}: {}", ip, e)))?;

        debug!(ip = %ip, name = %name, "Reverse lookup complete");
        Ok(vec![name])
    }
}
