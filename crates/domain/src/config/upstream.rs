use serde::{Deserialize, Serialize};

/// Comma separated upstream servers, second in priority after the CLI.
pub const SERVERS_ENV_VAR: &str = "DNS_MCP_SERVERS";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub servers: Vec<String>,

    /// Where `servers` came from; not read from or written to files.
    #[serde(skip)]
    pub source: UpstreamSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpstreamSource {
    CommandLine,
    Environment,
    ConfigFile,
    #[default]
    Discovery,
}

impl UpstreamSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CommandLine => "command-line",
            Self::Environment => "environment",
            Self::ConfigFile => "config-file",
            Self::Discovery => "discovery",
        }
    }
}
