use crate::dns::forwarding::{
    DnsResponse, MessageBuilder, PreparedQuery, RecordTypeMapper, ResponseParser,
};
use crate::dns::transport::{DnsTransport, TcpTransport, UdpTransport};
use dns_mcp_domain::{DnsAnswer, DnsQuery, DomainError, NameserverList};
use hickory_proto::op::ResponseCode;
use std::net::{IpAddr, SocketAddr};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub const DEFAULT_PORT: u16 = 53;
pub const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(10);
pub const LIFETIME: Duration = Duration::from_secs(30);

const INITIAL_BACKOFF: Duration = Duration::from_millis(100);
const MAX_BACKOFF: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverSettings {
    /// Upper bound for one exchange with one server.
    pub attempt_timeout: Duration,
    /// Upper bound for the whole query across all servers and rounds.
    pub lifetime: Duration,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            attempt_timeout: ATTEMPT_TIMEOUT,
            lifetime: LIFETIME,
            initial_backoff: INITIAL_BACKOFF,
            max_backoff: MAX_BACKOFF,
        }
    }
}

enum Attempt {
    Answered(DnsResponse),
    /// No reply in time; the server stays eligible for the next round.
    TimedOut,
    /// The server cannot help with this query.
    Failed(String),
}

/// Synchronous stub resolver bound to a fixed list of nameservers.
///
/// Every call to [`BlockingResolver::resolve`] blocks the current thread for
/// the network round-trips, so async callers go through
/// [`super::UpstreamResolver`].
pub struct BlockingResolver {
    servers: NameserverList,
    targets: Vec<SocketAddr>,
    settings: ResolverSettings,
}

impl BlockingResolver {
    pub fn new(servers: NameserverList) -> Self {
        Self::with_settings(servers, ResolverSettings::default())
    }

    pub fn with_settings(servers: NameserverList, settings: ResolverSettings) -> Self {
        let targets: Vec<SocketAddr> = servers
            .iter()
            .filter_map(|server| {
                let target = parse_target(server);
                if target.is_none() {
                    warn!(server, "Skipping nameserver that is not an IP address");
                }
                target
            })
            .collect();

        info!(
            servers = %servers,
            usable = targets.len(),
            attempt_timeout_ms = settings.attempt_timeout.as_millis() as u64,
            lifetime_ms = settings.lifetime.as_millis() as u64,
            "Blocking resolver created"
        );

        Self {
            servers,
            targets,
            settings,
        }
    }

    pub fn upstream_servers(&self) -> &NameserverList {
        &self.servers
    }

    pub fn resolve(&self, query: &DnsQuery) -> Result<DnsAnswer, DomainError> {
        if self.targets.is_empty() {
            return Err(DomainError::NoUsableNameservers);
        }

        let queried_type = RecordTypeMapper::to_hickory(&query.record_type)?;
        let prepared = MessageBuilder::build_query_with_id(&query.domain, &query.record_type)?;

        let started = Instant::now();
        let mut eligible = self.targets.clone();
        let mut failures: Vec<String> = Vec::new();
        let mut backoff = self.settings.initial_backoff;

        loop {
            let mut next_round = Vec::with_capacity(eligible.len());

            for server in eligible {
                let remaining = self.settings.lifetime.saturating_sub(started.elapsed());
                if remaining.is_zero() {
                    return Err(DomainError::QueryTimeout);
                }
                let timeout = remaining.min(self.settings.attempt_timeout);

                match self.exchange(server, &prepared, timeout) {
                    Attempt::Answered(response) if response.is_nxdomain() => {
                        debug!(server = %server, domain = %query.domain, "NXDOMAIN");
                        return Err(DomainError::NxDomain);
                    }
                    Attempt::Answered(response) if response.rcode != ResponseCode::NoError => {
                        let status = ResponseParser::rcode_to_status(response.rcode);
                        warn!(server = %server, rcode = status, "Nameserver refused, failing over");
                        failures.push(format!("{} answered {}", server, status));
                    }
                    Attempt::Answered(response) => {
                        let (records, ttl) = response.shape_answers(queried_type);
                        debug!(
                            server = %server,
                            domain = %query.domain,
                            record_type = %query.record_type,
                            records = records.len(),
                            "Nameserver answered"
                        );
                        return match ttl {
                            Some(ttl) => Ok(DnsAnswer::new(records, ttl)),
                            None => Err(DomainError::NoAnswer(query.record_type.to_string())),
                        };
                    }
                    Attempt::TimedOut => {
                        debug!(
                            server = %server,
                            timeout_ms = timeout.as_millis() as u64,
                            "Nameserver timed out"
                        );
                        next_round.push(server);
                    }
                    Attempt::Failed(reason) => {
                        warn!(server = %server, reason = %reason, "Nameserver failed, failing over");
                        failures.push(format!("{} answered {}", server, reason));
                    }
                }
            }

            if next_round.is_empty() {
                return Err(DomainError::AllNameserversFailed(format!(
                    "{} IN {}: {}",
                    query.domain,
                    query.record_type,
                    failures.join("; ")
                )));
            }

            let remaining = self.settings.lifetime.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                return Err(DomainError::QueryTimeout);
            }
            thread::sleep(backoff.min(remaining));
            backoff = (backoff * 2).min(self.settings.max_backoff);

            eligible = next_round;
        }
    }

    /// One UDP exchange, upgraded to TCP when the reply is truncated.
    fn exchange(&self, server: SocketAddr, query: &PreparedQuery, timeout: Duration) -> Attempt {
        let udp = UdpTransport::new(server);
        let response = match self.send_and_parse(&udp, query, timeout) {
            Ok(response) => response,
            Err(attempt) => return attempt,
        };

        if !response.truncated {
            return Attempt::Answered(response);
        }

        debug!(server = %server, "Truncated UDP response, retrying over TCP");
        let tcp = TcpTransport::new(server);
        match self.send_and_parse(&tcp, query, timeout) {
            Ok(response) => Attempt::Answered(response),
            Err(attempt) => attempt,
        }
    }

    fn send_and_parse(
        &self,
        transport: &dyn DnsTransport,
        query: &PreparedQuery,
        timeout: Duration,
    ) -> Result<DnsResponse, Attempt> {
        let bytes = match transport.send(&query.bytes, query.id, timeout) {
            Ok(bytes) => bytes,
            Err(DomainError::TransportTimeout { .. }) => return Err(Attempt::TimedOut),
            Err(e) => {
                return Err(Attempt::Failed(format!(
                    "{} error: {}",
                    transport.protocol_name(),
                    e
                )))
            }
        };

        ResponseParser::parse(&bytes).map_err(|e| Attempt::Failed(e.to_string()))
    }
}

/// Accepts a bare IP (port 53) or an `ip:port` / `[v6]:port` socket address.
pub fn parse_target(server: &str) -> Option<SocketAddr> {
    let server = server.trim();
    server
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, DEFAULT_PORT))
        .or_else(|_| server.parse::<SocketAddr>())
        .ok()
}
