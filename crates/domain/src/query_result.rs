use super::{NameserverList, RecordType, RecordValue};
use serde::Serialize;

/// Uniform response of the `dns_query` tool.
///
/// Only constructible through [`QueryResult::success`] and
/// [`QueryResult::failure`]: a success always carries a TTL and no error, a
/// failure always carries an error and no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    host: String,

    #[serde(rename = "type")]
    record_type: String,

    success: bool,

    records: Vec<RecordValue>,

    #[serde(skip_serializing_if = "Option::is_none")]
    ttl: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,

    upstream_servers: NameserverList,
}

impl QueryResult {
    pub fn success(
        host: impl Into<String>,
        record_type: &RecordType,
        records: Vec<RecordValue>,
        ttl: u32,
        upstream_servers: NameserverList,
    ) -> Self {
        Self {
            host: host.into(),
            record_type: record_type.to_string(),
            success: true,
            records,
            ttl: Some(ttl),
            error: None,
            upstream_servers,
        }
    }

    pub fn failure(
        host: impl Into<String>,
        record_type: &RecordType,
        error: impl Into<String>,
        upstream_servers: NameserverList,
    ) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "Unknown DNS error".to_string();
        }
        Self {
            host: host.into(),
            record_type: record_type.to_string(),
            success: false,
            records: Vec::new(),
            ttl: None,
            error: Some(error),
            upstream_servers,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn record_type(&self) -> &str {
        &self.record_type
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn records(&self) -> &[RecordValue] {
        &self.records
    }

    pub fn ttl(&self) -> Option<u32> {
        self.ttl
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn upstream_servers(&self) -> &NameserverList {
        &self.upstream_servers
    }
}
