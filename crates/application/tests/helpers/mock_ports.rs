#![allow(dead_code)]

use async_trait::async_trait;
use dns_mcp_application::ports::{DnsResolver, SystemProbe};
use dns_mcp_domain::{DnsAnswer, DnsQuery, DomainError, NameserverList, RecordType};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

pub struct MockDnsResolver {
    servers: NameserverList,
    responses: Mutex<HashMap<String, Result<DnsAnswer, DomainError>>>,
    seen: Mutex<Vec<(String, RecordType)>>,
}

impl MockDnsResolver {
    pub fn new(servers: &[&str]) -> Self {
        Self {
            servers: NameserverList::new(servers.iter().copied()),
            responses: Mutex::new(HashMap::new()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn set_response(&self, domain: &str, answer: DnsAnswer) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Ok(answer));
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(domain.to_string(), Err(error));
    }

    pub fn seen(&self) -> Vec<(String, RecordType)> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        self.seen
            .lock()
            .unwrap()
            .push((query.domain.to_string(), query.record_type.clone()));

        self.responses
            .lock()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .unwrap_or(Err(DomainError::NxDomain))
    }

    fn upstream_servers(&self) -> &NameserverList {
        &self.servers
    }
}

/// Scripted host: unknown commands behave as "not found", unknown files as
/// missing.
#[derive(Default)]
pub struct FakeSystemProbe {
    commands: Mutex<HashMap<String, Result<String, DomainError>>>,
    files: Mutex<HashMap<PathBuf, String>>,
    calls: Mutex<Vec<String>>,
}

impl FakeSystemProbe {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn key(program: &str, args: &[&str]) -> String {
        std::iter::once(program)
            .chain(args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn command_output(&self, command_line: &str, output: &str) {
        self.commands
            .lock()
            .unwrap()
            .insert(command_line.to_string(), Ok(output.to_string()));
    }

    pub fn command_error(&self, command_line: &str, error: DomainError) {
        self.commands
            .lock()
            .unwrap()
            .insert(command_line.to_string(), Err(error));
    }

    pub fn file(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl SystemProbe for FakeSystemProbe {
    async fn run_command(&self, program: &str, args: &[&str]) -> Result<String, DomainError> {
        let key = Self::key(program, args);
        self.calls.lock().unwrap().push(key.clone());
        self.commands
            .lock()
            .unwrap()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Err(DomainError::CommandFailed(format!("{}: not found", program))))
    }

    async fn read_file(&self, path: &Path) -> Result<String, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("read {}", path.display()));
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| DomainError::IoError(format!("{}: not found", path.display())))
    }
}
