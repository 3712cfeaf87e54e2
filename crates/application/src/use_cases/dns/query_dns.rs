use crate::ports::DnsResolver;
use dns_mcp_domain::{DnsQuery, NameserverList, QueryResult};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Resolves one hostname and folds every outcome into a [`QueryResult`].
pub struct QueryDnsUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl QueryDnsUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub fn upstream_servers(&self) -> &NameserverList {
        self.resolver.upstream_servers()
    }

    /// `record_type` is matched case-insensitively; unknown names are passed
    /// through to the resolver as-is.
    pub async fn execute(&self, host: &str, record_type: &str) -> QueryResult {
        let query = DnsQuery::parse(host, record_type);
        self.execute_query(&query).await
    }

    pub async fn execute_query(&self, query: &DnsQuery) -> QueryResult {
        let start = Instant::now();
        let upstream = self.resolver.upstream_servers().clone();

        match self.resolver.resolve(query).await {
            Ok(answer) => {
                info!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    records = answer.records.len(),
                    ttl = answer.ttl,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "DNS query answered"
                );
                QueryResult::success(
                    query.domain.as_ref(),
                    &query.record_type,
                    answer.records,
                    answer.ttl,
                    upstream,
                )
            }
            Err(e) => {
                debug!(
                    domain = %query.domain,
                    record_type = %query.record_type,
                    error = %e,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    "DNS query failed"
                );
                QueryResult::failure(
                    query.domain.as_ref(),
                    &query.record_type,
                    e.to_string(),
                    upstream,
                )
            }
        }
    }
}
