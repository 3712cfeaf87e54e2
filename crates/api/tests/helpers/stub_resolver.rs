#![allow(dead_code)]
use async_trait::async_trait;
use dns_mcp_api::{AppState, McpRouter};
use dns_mcp_application::ports::DnsResolver;
use dns_mcp_application::use_cases::QueryDnsUseCase;
use dns_mcp_domain::{DnsAnswer, DnsQuery, DomainError, NameserverList, RecordValue};
use serde_json::Value;
use std::sync::Arc;

/// Answers `example.com` with one A record and everything else with NXDOMAIN.
pub struct StubResolver {
    servers: NameserverList,
}

impl StubResolver {
    pub fn new() -> Self {
        Self {
            servers: NameserverList::new(["8.8.8.8", "8.8.4.4"]),
        }
    }
}

#[async_trait]
impl DnsResolver for StubResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        match query.domain.as_ref() {
            "example.com" => Ok(DnsAnswer::new(
                vec![RecordValue::text("93.184.216.34")],
                300,
            )),
            _ => Err(DomainError::NxDomain),
        }
    }

    fn upstream_servers(&self) -> &NameserverList {
        &self.servers
    }
}

pub fn create_router() -> McpRouter {
    let use_case = Arc::new(QueryDnsUseCase::new(Arc::new(StubResolver::new())));
    McpRouter::new(AppState::new(use_case))
}

pub async fn call(router: &McpRouter, line: &str) -> Value {
    let reply = router
        .handle_line(line)
        .await
        .expect("request should produce a reply");
    serde_json::from_str(&reply).unwrap()
}
