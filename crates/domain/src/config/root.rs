use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;
use super::server::ServerConfig;
use super::upstream::{UpstreamConfig, UpstreamSource};
use crate::NameserverList;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "dns-mcp.toml";

/// Main configuration structure for the DNS MCP server
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Compatibility port setting
    #[serde(default)]
    pub server: ServerConfig,

    /// Explicit upstream nameservers
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Worker pool sizing
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration and layer the overrides on top.
    ///
    /// Upstream server priority:
    /// 1. `--dns-servers` on the command line
    /// 2. the `DNS_MCP_SERVERS` environment value
    /// 3. `[upstream] servers` in the config file
    /// 4. nothing, leaving the caller to run OS discovery
    pub fn load(
        path: Option<&str>,
        cli_overrides: CliOverrides,
        env_servers: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };

        config.upstream.source = if config.upstream.servers.is_empty() {
            UpstreamSource::Discovery
        } else {
            UpstreamSource::ConfigFile
        };

        config.apply_env_servers(env_servers);
        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_env_servers(&mut self, env_servers: Option<&str>) {
        let Some(value) = env_servers else {
            return;
        };
        let servers = NameserverList::from_comma_separated(value);
        if !servers.is_empty() {
            self.upstream.servers = servers.to_vec();
            self.upstream.source = UpstreamSource::Environment;
        }
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(servers) = overrides.dns_servers {
            let servers = NameserverList::new(servers);
            if !servers.is_empty() {
                self.upstream.servers = servers.to_vec();
                self.upstream.source = UpstreamSource::CommandLine;
            }
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Explicitly configured servers, or `None` when discovery must run.
    pub fn explicit_servers(&self) -> Option<NameserverList> {
        let servers = NameserverList::new(&self.upstream.servers);
        (!servers.is_empty()).then_some(servers)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.max_workers == 0 {
            return Err(ConfigError::Validation(
                "resolver.max_workers must be at least 1".to_string(),
            ));
        }

        if self.upstream.servers.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "Upstream server entries cannot be blank".to_string(),
            ));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub dns_servers: Option<Vec<String>>,
    pub port: Option<i64>,
    pub log_level: Option<String>,
}
