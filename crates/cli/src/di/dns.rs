use dns_mcp_application::services::NameserverDiscovery;
use dns_mcp_application::use_cases::QueryDnsUseCase;
use dns_mcp_domain::{Config, HostOs, NameserverList, UpstreamSource};
use dns_mcp_infrastructure::dns::{BlockingResolver, UpstreamResolver};
use dns_mcp_infrastructure::system::HostSystemProbe;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub upstream_servers: NameserverList,
    pub upstream_source: UpstreamSource,
    pub query_dns: Arc<QueryDnsUseCase>,
}

impl DnsServices {
    pub async fn new(config: &Config, os: HostOs) -> Self {
        let (upstream_servers, upstream_source) = match config.explicit_servers() {
            Some(servers) => (servers, config.upstream.source),
            None => (Self::discover(os).await, UpstreamSource::Discovery),
        };

        info!(
            servers = %upstream_servers,
            source = upstream_source.as_str(),
            "Upstream DNS servers selected"
        );

        let resolver = UpstreamResolver::new(BlockingResolver::new(upstream_servers.clone()));
        let query_dns = Arc::new(QueryDnsUseCase::new(Arc::new(resolver)));

        Self {
            upstream_servers,
            upstream_source,
            query_dns,
        }
    }

    async fn discover(os: HostOs) -> NameserverList {
        let discovery = NameserverDiscovery::new(Arc::new(HostSystemProbe::new()), os);
        discovery.discover().await
    }
}
