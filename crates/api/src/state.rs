use dns_mcp_application::use_cases::QueryDnsUseCase;
use std::sync::Arc;

pub const SERVER_NAME: &str = "DNS MCP Server";

#[derive(Clone)]
pub struct AppState {
    pub query_dns: Arc<QueryDnsUseCase>,
    pub server_version: &'static str,
}

impl AppState {
    pub fn new(query_dns: Arc<QueryDnsUseCase>) -> Self {
        Self {
            query_dns,
            server_version: env!("CARGO_PKG_VERSION"),
        }
    }
}
