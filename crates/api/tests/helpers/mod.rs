#![allow(dead_code)]

use async_trait::async_trait;
use axum::{extract::connect_info::MockConnectInfo, Router};
use hostinfo_api::{create_api_routes, AppState};
use hostinfo_application::ports::{CallerStore, HostLookup};
use hostinfo_application::use_cases::{
    GetLastCallerUseCase, RecordCallerUseCase, ResolveFqdnUseCase,
};
use hostinfo_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

/// Host with a fixed name and a PTR record for a single IPv4 address.
pub struct StaticHostLookup {
    hostname: Option<String>,
    ptr_name: Option<String>,
}

impl StaticHostLookup {
    pub fn resolvable(hostname: &str, ptr_name: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            ptr_name: Some(ptr_name.to_string()),
        }
    }

    pub fn without_dns(hostname: &str) -> Self {
        Self {
            hostname: Some(hostname.to_string()),
            ptr_name: None,
        }
    }

    pub fn broken() -> Self {
        Self {
            hostname: None,
            ptr_name: None,
        }
    }
}

#[async_trait]
impl HostLookup for StaticHostLookup {
    fn local_hostname(&self) -> Result<String, DomainError> {
        self.hostname
            .clone()
            .ok_or_else(|| DomainError::HostnameUnavailable("uname failed".to_string()))
    }

    async fn lookup_ip(&self, _host: &str) -> Result<Vec<IpAddr>, DomainError> {
        match self.ptr_name {
            Some(_) => Ok(vec!["10.20.30.40".parse().unwrap()]),
            None => Err(DomainError::LookupFailed("SERVFAIL".to_string())),
        }
    }

    async fn lookup_addr(&self, _ip: IpAddr) -> Result<Vec<String>, DomainError> {
        Ok(self.ptr_name.iter().cloned().collect())
    }
}

pub fn build_app(lookup: impl HostLookup + 'static, store: Arc<dyn CallerStore>) -> Router {
    let state = AppState {
        resolve_fqdn: Arc::new(ResolveFqdnUseCase::new(Arc::new(lookup))),
        record_caller: Arc::new(RecordCallerUseCase::new(store.clone())),
        get_last_caller: Arc::new(GetLastCallerUseCase::new(store)),
    };

    create_api_routes(state).layer(MockConnectInfo(SocketAddr::from(([10, 0, 0, 5], 1234))))
}
