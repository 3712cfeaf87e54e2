pub mod record;
pub mod record_type;

pub use record::{DnsAnswer, RecordValue, SoaRecord};
pub use record_type::RecordType;
