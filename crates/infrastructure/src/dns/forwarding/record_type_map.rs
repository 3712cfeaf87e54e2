//! Mapping from `dns_mcp_domain::RecordType` to `hickory_proto::rr::RecordType`.
//!
//! The shaped types map one-to-one. Every other name is handed to hickory's
//! own parser, so `SRV`, `CAA`, `PTR` and friends work without being modelled
//! in the domain.

use dns_mcp_domain::{DomainError, RecordType};
use hickory_proto::rr::RecordType as HickoryRecordType;
use std::str::FromStr;

/// Question-only types; checked by name because hickory does not parse all of them.
const META_TYPES: [&str; 4] = ["ANY", "AXFR", "IXFR", "OPT"];

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    /// Convert a domain record type into the wire type used for the question.
    ///
    /// Fails with `UnknownRecordType` for names hickory does not know and with
    /// `MetaQuery` for question-only types that never appear as answers.
    pub fn to_hickory(record_type: &RecordType) -> Result<HickoryRecordType, DomainError> {
        if META_TYPES.contains(&record_type.as_str()) {
            return Err(DomainError::MetaQuery(record_type.to_string()));
        }

        let hickory_type = match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::AAAA => HickoryRecordType::AAAA,
            RecordType::CNAME => HickoryRecordType::CNAME,
            RecordType::MX => HickoryRecordType::MX,
            RecordType::TXT => HickoryRecordType::TXT,
            RecordType::NS => HickoryRecordType::NS,
            RecordType::SOA => HickoryRecordType::SOA,
            RecordType::Other(name) => HickoryRecordType::from_str(name)
                .map_err(|_| DomainError::UnknownRecordType(name.to_string()))?,
        };

        // hickory also parses `*` as ANY
        if hickory_type == HickoryRecordType::ANY {
            return Err(DomainError::MetaQuery(record_type.to_string()));
        }

        Ok(hickory_type)
    }
}
