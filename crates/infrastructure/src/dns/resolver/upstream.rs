use super::BlockingResolver;
use async_trait::async_trait;
use dns_mcp_application::ports::DnsResolver;
use dns_mcp_domain::{DnsAnswer, DnsQuery, DomainError, NameserverList};
use std::sync::Arc;
use tracing::error;

/// Async face of [`BlockingResolver`].
///
/// Each lookup runs on tokio's blocking pool, whose size caps how many
/// lookups are in flight at once.
pub struct UpstreamResolver {
    inner: Arc<BlockingResolver>,
}

impl UpstreamResolver {
    pub fn new(resolver: BlockingResolver) -> Self {
        Self {
            inner: Arc::new(resolver),
        }
    }
}

#[async_trait]
impl DnsResolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        let resolver = Arc::clone(&self.inner);
        let query = query.clone();

        tokio::task::spawn_blocking(move || resolver.resolve(&query))
            .await
            .map_err(|e| {
                error!(error = %e, "Resolver worker failed");
                DomainError::ResolverUnavailable(e.to_string())
            })?
    }

    fn upstream_servers(&self) -> &NameserverList {
        self.inner.upstream_servers()
    }
}
