use dns_mcp_domain::{DomainError, RecordValue, SoaRecord};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct DnsResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// Name from the question section, when the server echoed one.
    pub query_name: Option<Name>,

    pub answers: Vec<Record>,
}

impl DnsResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.rcode == ResponseCode::NXDomain
    }

    /// Shape every answer of the queried type owned by the end of the CNAME chain.
    ///
    /// The chain itself and records for unrelated owners are skipped. The
    /// returned TTL is the minimum over the shaped records and is `None` when
    /// nothing matched.
    pub fn shape_answers(&self, queried: HickoryRecordType) -> (Vec<RecordValue>, Option<u32>) {
        let owner = self.answer_owner(queried);
        let mut records = Vec::new();
        let mut min_ttl: Option<u32> = None;

        let matching = self.answers.iter().filter(|r| {
            r.record_type() == queried
                && match &owner {
                    Some(owner) => r.name() == owner,
                    None => true,
                }
        });

        for record in matching {
            let record_ttl = record.ttl();
            min_ttl = Some(min_ttl.map_or(record_ttl, |current| current.min(record_ttl)));
            records.push(shape_rdata(record.data()));
        }

        (records, min_ttl)
    }

    /// Follow CNAMEs from the question name. Bounded by the answer count so a
    /// looping chain terminates.
    fn answer_owner(&self, queried: HickoryRecordType) -> Option<Name> {
        let mut owner = self.query_name.clone()?;
        if queried == HickoryRecordType::CNAME {
            return Some(owner);
        }

        for _ in 0..self.answers.len() {
            let next = self.answers.iter().find_map(|r| match r.data() {
                RData::CNAME(target) if r.name() == &owner => Some(target.0.clone()),
                _ => None,
            });
            match next {
                Some(target) => owner = target,
                None => break,
            }
        }

        Some(owner)
    }
}

fn shape_rdata(rdata: &RData) -> RecordValue {
    match rdata {
        RData::A(a) => RecordValue::text(a.0.to_string()),
        RData::AAAA(aaaa) => RecordValue::text(aaaa.0.to_string()),
        RData::CNAME(target) => RecordValue::text(target.0.to_utf8()),
        RData::NS(target) => RecordValue::text(target.0.to_utf8()),
        RData::MX(mx) => RecordValue::mx(mx.preference(), mx.exchange().to_utf8()),
        RData::TXT(txt) => {
            let segments: Vec<String> = txt
                .txt_data()
                .iter()
                .map(|segment| String::from_utf8_lossy(segment).into_owned())
                .collect();
            RecordValue::text(segments.join(" "))
        }
        RData::SOA(soa) => RecordValue::Soa(SoaRecord {
            primary_server: soa.mname().to_utf8(),
            responsible_mailbox: soa.rname().to_utf8(),
            serial: soa.serial(),
            refresh: i64::from(soa.refresh()),
            retry: i64::from(soa.retry()),
            expire: i64::from(soa.expire()),
            minimum_ttl: soa.minimum(),
        }),
        other => RecordValue::text(other.to_string()),
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let id = message.id();
        let rcode = message.response_code();
        let truncated = message.truncated();
        let query_name = message.queries().first().map(|q| q.name().clone());
        let answers = message.answers().to_vec();

        debug!(
            id,
            rcode = ?rcode,
            answers = answers.len(),
            truncated = truncated,
            "DNS response parsed"
        );

        Ok(DnsResponse {
            id,
            rcode,
            truncated,
            query_name,
            answers,
        })
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}
