use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Public resolvers used when nothing else yields an address.
pub const PUBLIC_FALLBACK_NAMESERVERS: [&str; 2] = ["8.8.8.8", "8.8.4.4"];

/// Ordered, deduplicated upstream nameserver addresses.
///
/// Immutable once built; clones share the same backing slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameserverList {
    servers: Arc<[String]>,
}

impl NameserverList {
    /// Trims entries, drops blanks and keeps the first occurrence of each.
    pub fn new<I, S>(servers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for server in servers {
            let server = server.as_ref().trim();
            if server.is_empty() || unique.iter().any(|s| s == server) {
                continue;
            }
            unique.push(server.to_string());
        }
        Self {
            servers: unique.into(),
        }
    }

    pub fn public_fallback() -> Self {
        Self::new(PUBLIC_FALLBACK_NAMESERVERS)
    }

    /// Parses a comma separated list such as the `DNS_MCP_SERVERS` value.
    pub fn from_comma_separated(value: &str) -> Self {
        Self::new(value.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.servers.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.servers.to_vec()
    }
}

impl fmt::Display for NameserverList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.servers.join(", "))
    }
}

impl Serialize for NameserverList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.servers.as_ref().serialize(serializer)
    }
}

impl From<Vec<String>> for NameserverList {
    fn from(servers: Vec<String>) -> Self {
        Self::new(servers)
    }
}
