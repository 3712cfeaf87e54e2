//! DNS MCP Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod host_os;
pub mod nameservers;
pub mod query_result;

pub use config::{CliOverrides, Config, ConfigError, UpstreamSource, SERVERS_ENV_VAR};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsAnswer, RecordType, RecordValue, SoaRecord};
pub use errors::DomainError;
pub use host_os::HostOs;
pub use nameservers::{NameserverList, PUBLIC_FALLBACK_NAMESERVERS};
pub use query_result::QueryResult;
