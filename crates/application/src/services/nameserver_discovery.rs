//! Upstream nameserver discovery from the host's network configuration.
//!
//! Each operating system exposes its resolver settings differently, so every
//! [`HostOs`] arm runs its own ordered chain of strategies. The first strategy
//! that yields at least one address wins. Failures never escape: they fall
//! through to the next strategy and finally to the public resolvers.

use dns_mcp_domain::{HostOs, NameserverList};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::SystemProbe;

pub const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";

const WIFI_SERVICE: &str = "Wi-Fi";
const ETHERNET_SERVICE: &str = "Ethernet";

pub struct NameserverDiscovery {
    probe: Arc<dyn SystemProbe>,
    os: HostOs,
    resolv_conf: PathBuf,
}

impl NameserverDiscovery {
    pub fn new(probe: Arc<dyn SystemProbe>, os: HostOs) -> Self {
        Self {
            probe,
            os,
            resolv_conf: PathBuf::from(RESOLV_CONF_PATH),
        }
    }

    pub fn with_resolv_conf(mut self, path: impl Into<PathBuf>) -> Self {
        self.resolv_conf = path.into();
        self
    }

    #[instrument(skip(self), fields(os = %self.os))]
    pub async fn discover(&self) -> NameserverList {
        let found = match self.os {
            HostOs::Windows => self.windows().await,
            HostOs::Linux => self.linux().await,
            HostOs::MacOs => self.macos().await,
            HostOs::Other => Vec::new(),
        };

        let servers = NameserverList::new(found);
        if servers.is_empty() {
            warn!("No system nameservers found, using public fallback");
            return NameserverList::public_fallback();
        }

        info!(servers = %servers, "System nameservers discovered");
        servers
    }

    async fn windows(&self) -> Vec<String> {
        self.command_stage("nslookup", &["localhost"], parse_nslookup_output)
            .await
    }

    async fn linux(&self) -> Vec<String> {
        read_resolv_conf(self.probe.as_ref(), &self.resolv_conf).await
    }

    async fn macos(&self) -> Vec<String> {
        let servers = self
            .command_stage("scutil", &["--dns"], parse_scutil_dns)
            .await;
        if !servers.is_empty() {
            return servers;
        }

        for service in [WIFI_SERVICE, ETHERNET_SERVICE] {
            let servers = self
                .command_stage("networksetup", &["-getdnsservers", service], |output| {
                    parse_networksetup_output(output, service)
                })
                .await;
            if !servers.is_empty() {
                return servers;
            }
        }

        read_resolv_conf(self.probe.as_ref(), &self.resolv_conf).await
    }

    async fn command_stage<F>(&self, program: &str, args: &[&str], parse: F) -> Vec<String>
    where
        F: Fn(&str) -> Vec<String>,
    {
        match self.probe.run_command(program, args).await {
            Ok(output) => {
                let servers = parse(&output);
                debug!(program, ?args, found = servers.len(), "Discovery command parsed");
                servers
            }
            Err(e) => {
                debug!(program, ?args, error = %e, "Discovery command failed");
                Vec::new()
            }
        }
    }
}

async fn read_resolv_conf(probe: &dyn SystemProbe, path: &Path) -> Vec<String> {
    match probe.read_file(path).await {
        Ok(content) => {
            let servers = parse_resolv_conf(&content);
            debug!(path = %path.display(), found = servers.len(), "Resolver config parsed");
            servers
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "Resolver config unreadable");
            Vec::new()
        }
    }
}

/// `nameserver <addr>` lines of a resolv.conf, in file order.
pub fn parse_resolv_conf(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next()) {
                (Some("nameserver"), Some(addr)) => Some(addr.to_string()),
                _ => None,
            }
        })
        .collect()
}

/// Server addresses echoed by `nslookup localhost`.
///
/// The query target itself is skipped when it shows up as an address.
pub fn parse_nslookup_output(output: &str) -> Vec<String> {
    output
        .lines()
        .filter(|line| line.contains("Address:"))
        .filter_map(|line| {
            let server = after_last_colon(line);
            (!server.is_empty() && server != "localhost").then(|| server.to_string())
        })
        .collect()
}

/// `nameserver[0]` / `nameserver[1]` entries of `scutil --dns`, deduplicated.
pub fn parse_scutil_dns(output: &str) -> Vec<String> {
    let mut servers: Vec<String> = Vec::new();
    for line in output.lines().map(str::trim) {
        if !(line.contains("nameserver[0]") || line.contains("nameserver[1]")) {
            continue;
        }
        if !line.contains(':') {
            continue;
        }
        let server = after_last_colon(line);
        if !server.is_empty() && !servers.iter().any(|s| s == server) {
            servers.push(server.to_string());
        }
    }
    servers
}

/// Dotted-quad lines of `networksetup -getdnsservers <service>`.
pub fn parse_networksetup_output(output: &str, service: &str) -> Vec<String> {
    let sentinel = format!("There aren't any DNS Servers set on {}.", service);
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != sentinel)
        .filter(|line| is_dotted_quad(line))
        .map(str::to_string)
        .collect()
}

/// Four dot-separated groups of ASCII digits.
///
/// Purely syntactic: octet ranges are not checked, so `999.999.999.999`
/// passes.
pub fn is_dotted_quad(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 4
        && parts
            .iter()
            .all(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
}

fn after_last_colon(line: &str) -> &str {
    line.rsplit(':').next().unwrap_or_default().trim()
}
