use serde::{Deserialize, Serialize};

/// One shaped answer entry.
///
/// Serialized untagged: A/AAAA/CNAME/NS/TXT and unshaped types are plain
/// strings, MX and SOA are objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordValue {
    Mx { priority: u16, exchange: String },

    Soa(SoaRecord),

    Text(String),
}

impl RecordValue {
    pub fn text(value: impl Into<String>) -> Self {
        RecordValue::Text(value.into())
    }

    pub fn mx(priority: u16, exchange: impl Into<String>) -> Self {
        RecordValue::Mx {
            priority,
            exchange: exchange.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaRecord {
    #[serde(rename = "mname")]
    pub primary_server: String,

    #[serde(rename = "rname")]
    pub responsible_mailbox: String,

    pub serial: u32,

    pub refresh: i64,

    pub retry: i64,

    pub expire: i64,

    #[serde(rename = "minimum")]
    pub minimum_ttl: u32,
}

/// Successful outcome of one lookup: the shaped records of the queried type
/// and the answer set's TTL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsAnswer {
    pub records: Vec<RecordValue>,
    pub ttl: u32,
}

impl DnsAnswer {
    pub fn new(records: Vec<RecordValue>, ttl: u32) -> Self {
        Self { records, ttl }
    }
}
