use async_trait::async_trait;
use dns_mcp_domain::{DnsAnswer, DnsQuery, DomainError, NameserverList};

#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// One lookup against the bound upstream servers.
    ///
    /// Implementations must not block the calling task for the network
    /// round-trip.
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError>;

    fn upstream_servers(&self) -> &NameserverList;
}
