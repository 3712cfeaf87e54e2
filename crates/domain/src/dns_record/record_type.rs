use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Record types with a dedicated result shape; everything else is `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecordType {
    #[default]
    A,
    AAAA,
    CNAME,
    MX,
    TXT,
    NS,
    SOA,

    /// Any other type name, stored uppercase.
    Other(Arc<str>),
}

impl RecordType {
    pub fn as_str(&self) -> &str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::SOA => "SOA",
            RecordType::Other(name) => name,
        }
    }

    /// Case-insensitive parse; unrecognized names are kept as `Other`.
    /// Whitespace is not stripped.
    pub fn normalize(s: &str) -> Self {
        let upper = s.to_uppercase();
        match upper.as_str() {
            "A" => RecordType::A,
            "AAAA" => RecordType::AAAA,
            "CNAME" => RecordType::CNAME,
            "MX" => RecordType::MX,
            "TXT" => RecordType::TXT,
            "NS" => RecordType::NS,
            "SOA" => RecordType::SOA,
            _ => RecordType::Other(Arc::from(upper)),
        }
    }

    pub fn supported() -> &'static [&'static str] {
        &["A", "AAAA", "MX", "CNAME", "TXT", "NS", "SOA"]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::normalize(s))
    }
}
