#![allow(dead_code)]

use async_trait::async_trait;
use hostinfo_application::ports::{CallerStore, HostLookup};
use hostinfo_domain::{CallerRecord, DomainError};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ============================================================================
// Mock HostLookup
// ============================================================================

pub struct MockHostLookup {
    hostname: Result<String, DomainError>,
    forward: HashMap<String, Result<Vec<IpAddr>, DomainError>>,
    reverse: HashMap<IpAddr, Result<Vec<String>, DomainError>>,
    reverse_calls: Mutex<Vec<IpAddr>>,
}

impl MockHostLookup {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: Ok(hostname.to_string()),
            forward: HashMap::new(),
            reverse: HashMap::new(),
            reverse_calls: Mutex::new(Vec::new()),
        }
    }

    pub fn without_hostname(message: &str) -> Self {
        Self {
            hostname: Err(DomainError::HostnameUnavailable(message.to_string())),
            ..Self::new("")
        }
    }

    pub fn with_forward(mut self, host: &str, addrs: &[&str]) -> Self {
        let addrs: Vec<IpAddr> = addrs.iter().map(|a| a.parse().unwrap()).collect();
        self.forward.insert(host.to_string(), Ok(addrs));
        self
    }

    pub fn with_forward_error(mut self, host: &str) -> Self {
        self.forward.insert(
            host.to_string(),
            Err(DomainError::LookupFailed(format!("no such host: {}", host))),
        );
        self
    }

    pub fn with_reverse(mut self, ip: &str, names: &[&str]) -> Self {
        let names: Vec<String> = names.iter().map(|n| n.to_string()).collect();
        self.reverse.insert(ip.parse().unwrap(), Ok(names));
        self
    }

    pub fn with_reverse_error(mut self, ip: &str) -> Self {
        self.reverse.insert(
            ip.parse().unwrap(),
            Err(DomainError::LookupFailed(format!("no PTR for {}", ip))),
        );
        self
    }

    pub fn reverse_calls(&self) -> Vec<IpAddr> {
        self.reverse_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl HostLookup for MockHostLookup {
    fn local_hostname(&self) -> Result<String, DomainError> {
        self.hostname.clone()
    }

    async fn lookup_ip(&self, host: &str) -> Result<Vec<IpAddr>, DomainError> {
        self.forward
            .get(host)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::LookupFailed(format!("unknown host {}", host))))
    }

    async fn lookup_addr(&self, ip: IpAddr) -> Result<Vec<String>, DomainError> {
        self.reverse_calls.lock().unwrap().push(ip);
        self.reverse
            .get(&ip)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

// ============================================================================
// Mock CallerStore
// ============================================================================

pub struct MockCallerStore {
    enabled: bool,
    record: Mutex<Option<CallerRecord>>,
    read_error: Option<DomainError>,
    persist_calls: AtomicUsize,
}

impl MockCallerStore {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            record: Mutex::new(None),
            read_error: None,
            persist_calls: AtomicUsize::new(0),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::enabled()
        }
    }

    pub fn failing_reads(error: DomainError) -> Self {
        Self {
            read_error: Some(error),
            ..Self::enabled()
        }
    }

    pub fn persist_calls(&self) -> usize {
        self.persist_calls.load(Ordering::Relaxed)
    }

    pub fn stored(&self) -> Option<CallerRecord> {
        self.record.lock().unwrap().clone()
    }
}

#[async_trait]
impl CallerStore for MockCallerStore {
    async fn try_persist(&self, record: &CallerRecord) {
        self.persist_calls.fetch_add(1, Ordering::Relaxed);
        if self.enabled {
            *self.record.lock().unwrap() = Some(record.clone());
        }
    }

    async fn must_read(&self) -> Result<Option<CallerRecord>, DomainError> {
        if !self.enabled {
            return Ok(None);
        }
        if let Some(err) = &self.read_error {
            return Err(err.clone());
        }
        self.record
            .lock()
            .unwrap()
            .clone()
            .map(Some)
            .ok_or_else(|| DomainError::RecordReadFailure("no such file".to_string()))
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
