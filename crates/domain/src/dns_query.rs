use super::RecordType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, record_type: RecordType) -> Self {
        Self {
            domain: domain.into(),
            record_type,
        }
    }

    /// Builds a query from caller-supplied text, normalizing the type name.
    pub fn parse(domain: &str, record_type: &str) -> Self {
        Self::new(domain, RecordType::normalize(record_type))
    }
}
